//! Chat session state machine: message thread, document slot, in-flight flag.
//!
//! ARCHITECTURE
//! ============
//! `ChatSession` is a plain struct owned by the page that shows it (inside an
//! `RwSignal`) and handed to child components by value of the signal handle.
//! The only suspension point is the answer request, so `submit` is split
//! into two synchronous halves, `begin_submit` and `resolve_submit`, with
//! the async [`submit`] driver awaiting the collaborator between them.
//!
//! PHASES
//! ======
//! `Idle` (view not mounted) -> `AwaitingDocument` -> `Ready` <-> `Sending`.
//! `Sending` is the only phase in which `is_processing` is true, and at most
//! one question is outstanding.
//!
//! A reply that arrives after `clear` or `remove_document` is still appended.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use crate::net::types::ApiError;
use crate::state::document::{AttachedDocument, LocalHandle, RawFile};
use crate::state::toast::Notifier;
use crate::util::time::now_ms;

/// Notification text for a failed answer request.
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to process your request";

/// Failures surfaced by session operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("unsupported document type `{mime_type}`")]
    UnsupportedFormat { mime_type: String },
    #[error("answer request failed")]
    RequestFailed,
    #[error("no document attached")]
    NoDocumentAttached,
}

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single immutable chat message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub created_at_ms: f64,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into(), created_at_ms: now_ms() }
    }
}

/// Lifecycle phase derived from session fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Idle,
    AwaitingDocument,
    Ready,
    Sending,
}

/// A question accepted by `begin_submit`, ready to hand to the answer service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingQuestion {
    pub question: String,
    pub document_reference: String,
}

/// In-memory state for one document and its conversation.
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    document: Option<AttachedDocument>,
    is_processing: bool,
    mounted: bool,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Lifecycle ---

    /// Called when the owning view mounts.
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Called when the owning view unmounts. Releases the local handle.
    pub fn teardown(&mut self) {
        self.document = None;
        self.messages.clear();
        self.mounted = false;
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.is_processing {
            SessionPhase::Sending
        } else if self.document.is_some() {
            SessionPhase::Ready
        } else if self.mounted {
            SessionPhase::AwaitingDocument
        } else {
            SessionPhase::Idle
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn document(&self) -> Option<&AttachedDocument> {
        self.document.as_ref()
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    /// Reference for the attached document.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoDocumentAttached`] when the slot is empty.
    pub fn document_reference(&self) -> Result<&str, SessionError> {
        self.document
            .as_ref()
            .map(AttachedDocument::document_reference)
            .ok_or(SessionError::NoDocumentAttached)
    }

    // --- Document slot ---

    /// Validate and attach a document, replacing any previous one.
    ///
    /// The previous document's local handle is released before the new one is
    /// stored, and the message list is cleared: a new document starts a fresh
    /// conversation.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnsupportedFormat`] for types other than
    /// PDF, DOC, DOCX and TXT; the session is left unchanged.
    pub fn attach_document(
        &mut self,
        raw: RawFile,
        local: LocalHandle,
        remote_path: Option<String>,
    ) -> Result<&AttachedDocument, SessionError> {
        let document = AttachedDocument::from_raw(raw, local, remote_path)?;
        self.document = None;
        self.messages.clear();
        self.mounted = true;
        Ok(self.document.insert(document))
    }

    /// Detach the document, release its handle and clear the thread.
    /// Returns whether a document was attached.
    pub fn remove_document(&mut self) -> bool {
        let removed = self.document.take().is_some();
        self.messages.clear();
        removed
    }

    /// Empty the thread, keeping the document.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    // --- Submit ---

    /// Accept a question: append it as a user message and enter `Sending`.
    ///
    /// Returns `None` (and changes nothing) for blank questions, without a
    /// document, or while another question is in flight.
    pub fn begin_submit(&mut self, question: &str) -> Option<PendingQuestion> {
        if question.trim().is_empty() || self.is_processing {
            return None;
        }
        let document_reference = self.document_reference().ok()?.to_owned();
        self.messages.push(ChatMessage::new(Role::User, question));
        self.is_processing = true;
        Some(PendingQuestion { question: question.to_owned(), document_reference })
    }

    /// Apply the answer service outcome and leave `Sending`.
    ///
    /// The user's message is kept on failure.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::RequestFailed`] when the request failed.
    pub fn resolve_submit(&mut self, outcome: Result<String, SessionError>) -> Result<(), SessionError> {
        self.is_processing = false;
        let reply = outcome.map_err(|_| SessionError::RequestFailed)?;
        self.messages.push(ChatMessage::new(Role::Assistant, reply));
        Ok(())
    }

    /// Leave `Sending` without a reply (the request was dropped).
    pub fn cancel_submit(&mut self) {
        self.is_processing = false;
    }
}

/// Where a session lives. The app keeps it in an `RwSignal`; tests use a
/// `RefCell`.
pub trait SessionStore {
    /// Run `f` against the session. `None` when the store is gone (the owning
    /// view was disposed).
    fn update_session<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R>;
}

impl SessionStore for leptos::prelude::RwSignal<ChatSession> {
    fn update_session<R>(&self, f: impl FnOnce(&mut ChatSession) -> R) -> Option<R> {
        use leptos::prelude::Update;
        self.try_update(f)
    }
}

/// Remote collaborator answering a question about a document.
pub trait AnswerService {
    fn ask(&self, question: &str, document_reference: &str) -> impl Future<Output = Result<String, ApiError>>;
}

/// Clears the in-flight flag if the submit future is dropped before the
/// reply is applied.
struct InFlight<'a, S: SessionStore> {
    store: &'a S,
    settled: bool,
}

impl<S: SessionStore> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        if !self.settled {
            self.store.update_session(ChatSession::cancel_submit);
        }
    }
}

/// Submit `question` for the session in `store`.
///
/// Appends the user message immediately, awaits `answers`, then appends the
/// reply. A failed request is logged and surfaced through `notifier`; the
/// in-flight flag is cleared on every path. Returns whether the question was
/// accepted.
pub async fn submit<S, A, N>(store: &S, answers: &A, notifier: &N, question: &str) -> bool
where
    S: SessionStore,
    A: AnswerService,
    N: Notifier,
{
    let Some(pending) = store.update_session(|s| s.begin_submit(question)).flatten() else {
        return false;
    };
    let mut in_flight = InFlight { store, settled: false };

    let outcome = answers
        .ask(&pending.question, &pending.document_reference)
        .await
        .map_err(|e| {
            leptos::logging::error!("answer request failed: {e}");
            SessionError::RequestFailed
        });

    let resolved = store.update_session(|s| s.resolve_submit(outcome));
    in_flight.settled = true;
    if let Some(Err(_)) = resolved {
        notifier.error(REQUEST_FAILED_MESSAGE);
    }
    true
}
