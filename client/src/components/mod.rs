//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the layout chrome, the upload dropzone, the chat thread
//! and the document viewer. Session state arrives as a prop from the owning
//! page; app-wide services (config, toasts, layout state) come from context.

pub mod chat_input;
pub mod chat_messages;
pub mod document_preview;
pub mod document_viewer;
pub mod file_upload;
pub mod layout;
pub mod toaster;
