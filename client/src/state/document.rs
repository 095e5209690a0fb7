//! Attached-document model and the local preview handle it owns.
//!
//! DESIGN
//! ======
//! A session holds at most one `AttachedDocument`. The document owns a
//! `LocalHandle` for the browser-local object URL created from the picked
//! file; the URL is revoked when the handle drops, so replacing, removing or
//! tearing down the document releases it exactly once without callers having
//! to remember to.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::fmt;

use crate::state::session::SessionError;
use crate::util::format::format_megabytes;

/// Supported document formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
    Txt,
}

impl DocumentKind {
    pub const ALL: [Self; 4] = [Self::Pdf, Self::Doc, Self::Docx, Self::Txt];

    /// Resolve a declared MIME type. Parameters (`; charset=...`) and case
    /// are ignored.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.mime_type() == essence)
    }

    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Doc => "application/msword",
            Self::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Self::Txt => "text/plain",
        }
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::Doc => ".doc",
            Self::Docx => ".docx",
            Self::Txt => ".txt",
        }
    }

    /// Whether the browser can render this format inline in an iframe.
    #[must_use]
    pub fn is_previewable(self) -> bool {
        matches!(self, Self::Pdf | Self::Txt)
    }
}

/// File metadata read off a browser `File` at intake.
#[derive(Clone, Debug, PartialEq)]
pub struct RawFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub last_modified_ms: f64,
}

type ReleaseFn = Box<dyn FnOnce(&str) + Send + Sync>;

/// Exclusive owner of a transient browser-local resource (an object URL).
///
/// The release hook runs once, when the handle is dropped.
pub struct LocalHandle {
    url: String,
    release: Option<ReleaseFn>,
}

impl LocalHandle {
    /// Wrap `url` with a hook that frees it.
    pub fn new(url: impl Into<String>, release: impl FnOnce(&str) + Send + Sync + 'static) -> Self {
        Self { url: url.into(), release: Some(Box::new(release)) }
    }

    /// A handle with nothing to free (server render, or no object URL).
    pub fn detached(url: impl Into<String>) -> Self {
        Self { url: url.into(), release: None }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for LocalHandle {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(&self.url);
        }
    }
}

impl fmt::Debug for LocalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalHandle")
            .field("url", &self.url)
            .field("owned", &self.release.is_some())
            .finish()
    }
}

/// The single document a chat session is about.
#[derive(Debug)]
pub struct AttachedDocument {
    pub id: String,
    pub name: String,
    pub size_bytes: u64,
    pub kind: DocumentKind,
    pub mime_type: String,
    pub last_modified_ms: f64,
    /// Path returned by the remote upload service, when the view uploads.
    pub remote_path: Option<String>,
    local: LocalHandle,
}

impl AttachedDocument {
    /// Build a document from intake metadata.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnsupportedFormat`] when the declared MIME type
    /// is not PDF, DOC, DOCX or TXT. The handle is dropped (and released) in
    /// that case.
    pub fn from_raw(raw: RawFile, local: LocalHandle, remote_path: Option<String>) -> Result<Self, SessionError> {
        let Some(kind) = DocumentKind::from_mime(&raw.mime_type) else {
            return Err(SessionError::UnsupportedFormat { mime_type: raw.mime_type });
        };
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: raw.name,
            size_bytes: raw.size_bytes,
            kind,
            mime_type: raw.mime_type,
            last_modified_ms: raw.last_modified_ms,
            remote_path,
            local,
        })
    }

    /// Reference sent with every question: the remote path when the file was
    /// uploaded, otherwise the file name.
    #[must_use]
    pub fn document_reference(&self) -> &str {
        self.remote_path.as_deref().unwrap_or(&self.name)
    }

    /// Object URL of the local copy (for Open / Download links).
    #[must_use]
    pub fn local_url(&self) -> &str {
        self.local.url()
    }

    /// Object URL to render inline, when the format supports it.
    #[must_use]
    pub fn preview_url(&self) -> Option<&str> {
        (self.kind.is_previewable() && !self.local.url().is_empty()).then(|| self.local.url())
    }

    /// Size label shown next to the name, e.g. `"(0.95 MB)"`.
    #[must_use]
    pub fn size_label(&self) -> String {
        format!("({} MB)", format_megabytes(self.size_bytes))
    }
}
