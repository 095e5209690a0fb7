use super::*;
use crate::state::document::{LocalHandle, RawFile};

fn session_with_document() -> ChatSession {
    let mut session = ChatSession::new();
    session.mount();
    let raw = RawFile {
        name: "lease.pdf".to_owned(),
        size_bytes: 4096,
        mime_type: "application/pdf".to_owned(),
        last_modified_ms: 0.0,
    };
    session.attach_document(raw, LocalHandle::detached("blob:lease"), None).unwrap();
    session
}

fn keys(session: &ChatSession) -> Vec<String> {
    session.messages().iter().map(row_key).collect()
}

#[test]
fn row_key_is_message_id() {
    let mut session = session_with_document();
    assert!(session.begin_submit("Who signs?").is_some());
    let msg = &session.messages()[0];
    assert_eq!(row_key(msg), msg.id);
}

#[test]
fn appending_messages_keeps_earlier_keys() {
    let mut session = session_with_document();
    assert!(session.begin_submit("Who signs?").is_some());
    session.resolve_submit(Ok("The tenant and the landlord.".to_owned())).unwrap();
    let before = keys(&session);

    assert!(session.begin_submit("When does it end?").is_some());
    session.resolve_submit(Ok("In 2027.".to_owned())).unwrap();
    let after = keys(&session);

    assert_eq!(after.len(), 4);
    assert_eq!(&after[..2], &before[..]);
}

#[test]
fn identical_questions_get_distinct_keys() {
    let mut session = session_with_document();
    for _ in 0..2 {
        assert!(session.begin_submit("Summarise").is_some());
        session.resolve_submit(Ok("Done.".to_owned())).unwrap();
    }
    let mut all = keys(&session);
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 4);
}
