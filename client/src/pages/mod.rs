//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each chat page owns its `ChatSession` in a page-local signal and passes
//! it to its components as a prop. The session is mounted when the page is
//! created and torn down on cleanup, which releases the document's local
//! preview URL.

pub mod dashboard;
pub mod doc_chat;
pub mod document_chat;

use leptos::prelude::*;

use crate::net::api::HttpAnswerService;
use crate::state::session::{ChatSession, submit};
use crate::state::toast::ToastState;

pub const DOCUMENT_UPLOADED_MESSAGE: &str = "Document uploaded successfully";
pub const DOCUMENT_REMOVED_MESSAGE: &str = "Document removed";

/// Create a page-owned session, mounted now and torn down with the page.
fn mounted_session() -> RwSignal<ChatSession> {
    let session = RwSignal::new(ChatSession::new());
    session.update(ChatSession::mount);
    on_cleanup(move || {
        session.try_update(ChatSession::teardown);
    });
    session
}

/// Send `question` for `session` in the background. Failures surface as a
/// toast from inside `submit`.
fn spawn_submit(
    session: RwSignal<ChatSession>,
    answers: HttpAnswerService,
    toasts: RwSignal<ToastState>,
    question: String,
) {
    leptos::task::spawn_local(async move {
        if !submit(&session, &answers, &toasts, &question).await {
            leptos::logging::log!("question not sent: session busy or no document");
        }
    });
}
