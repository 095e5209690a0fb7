//! Sidebar layout wrapping every routed page.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;

pub const BRAND: &str = "ContractPro";

/// A sidebar navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { label: "Dashboard", href: "/" },
    NavItem { label: "Document Chat", href: "/document-chat" },
    NavItem { label: "Chat with Docs", href: "/doc-chat" },
];

/// Whether `item` is the entry for the current `pathname`. The root entry
/// only matches exactly; the others also match nested paths.
#[must_use]
pub fn is_active(item: &NavItem, pathname: &str) -> bool {
    let pathname = match pathname.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    if item.href == "/" {
        return pathname == "/";
    }
    pathname == item.href
        || pathname
            .strip_prefix(item.href)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Sidebar navigation, top bar and routed content.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let close_sidebar = move || ui.update(|u| u.sidebar_open = false);

    let nav = NAV_ITEMS
        .iter()
        .map(|item| {
            let item = *item;
            let pathname = location.pathname;
            view! {
                <a
                    href=item.href
                    class="layout__nav-item"
                    class:layout__nav-item--active=move || pathname.with(|p| is_active(&item, p))
                    on:click=move |_| close_sidebar()
                >
                    {item.label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="layout">
            <aside class="layout__sidebar" class:layout__sidebar--open=move || ui.get().sidebar_open>
                <div class="layout__brand">
                    <h1>{BRAND}</h1>
                    <button class="layout__close" title="Close menu" on:click=move |_| close_sidebar()>
                        "✕"
                    </button>
                </div>
                <nav class="layout__nav">{nav}</nav>
                <a class="layout__logout" href="/" on:click=move |_| close_sidebar()>
                    "Logout"
                </a>
            </aside>

            <div class="layout__body">
                <header class="layout__topbar">
                    <button
                        class="layout__menu"
                        title="Open menu"
                        on:click=move |_| ui.update(|u| u.sidebar_open = true)
                    >
                        "☰"
                    </button>
                    <div class="layout__user">
                        <span class="layout__avatar" aria-hidden="true"></span>
                        <span class="layout__user-name">"Guest"</span>
                    </div>
                </header>
                <main class="layout__main">{children()}</main>
            </div>
        </div>
    }
}
