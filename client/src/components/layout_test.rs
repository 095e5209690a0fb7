use super::*;

fn item(href: &str) -> NavItem {
    *NAV_ITEMS.iter().find(|i| i.href == href).unwrap()
}

#[test]
fn root_matches_only_exactly() {
    let dashboard = item("/");
    assert!(is_active(&dashboard, "/"));
    assert!(is_active(&dashboard, ""));
    assert!(!is_active(&dashboard, "/document-chat"));
}

#[test]
fn section_matches_itself_and_nested_paths() {
    let chat = item("/doc-chat");
    assert!(is_active(&chat, "/doc-chat"));
    assert!(is_active(&chat, "/doc-chat/"));
    assert!(is_active(&chat, "/doc-chat/folder"));
    assert!(!is_active(&chat, "/doc-chatter"));
    assert!(!is_active(&chat, "/document-chat"));
}

#[test]
fn exactly_one_item_is_active_per_route() {
    for path in ["/", "/document-chat", "/doc-chat"] {
        let active = NAV_ITEMS.iter().filter(|i| is_active(i, path)).count();
        assert_eq!(active, 1, "{path}");
    }
}
