//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models.
//! `session` and `document` hold the chat-with-a-document lifecycle and are
//! owned by the page that shows them; `toast` and `ui` are app-wide chrome;
//! `folders` backs the folder sidebar of the multi-document view.

pub mod document;
pub mod folders;
pub mod session;
pub mod toast;
pub mod ui;
