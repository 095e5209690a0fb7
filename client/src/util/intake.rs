//! Document intake filter for the upload dropzone.
//!
//! SYSTEM CONTEXT
//! ==============
//! `FileUpload` uses this filter to build the `<input accept>` attribute and
//! to reject dropped files before they reach a session. The session
//! re-validates on attach, since intake can be bypassed programmatically.

#[cfg(test)]
#[path = "intake_test.rs"]
mod intake_test;

use crate::state::document::{DocumentKind, RawFile};

/// Message shown when a file is rejected at intake.
pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "Unsupported file type. Use PDF, DOC, DOCX or TXT";

/// Label listing the accepted formats.
pub const SUPPORTED_FORMATS_LABEL: &str = "Supported formats: PDF, DOC, DOCX, TXT";

/// Whether the dropzone accepts several files at once.
pub const ALLOW_MULTIPLE: bool = false;

/// Accept/reject decision for a candidate file.
#[must_use]
pub fn accepts(raw: &RawFile) -> bool {
    DocumentKind::from_mime(&raw.mime_type).is_some()
}

/// Value for the file input's `accept` attribute: every MIME type and
/// extension the dropzone takes.
#[must_use]
pub fn accept_attribute() -> String {
    DocumentKind::ALL
        .iter()
        .flat_map(|kind| [kind.mime_type(), kind.extension()])
        .collect::<Vec<_>>()
        .join(",")
}

/// Pick the files a single-select dropzone takes from a selection.
///
/// Returns the first file, or `None` for an empty selection.
#[must_use]
pub fn take_selection<T>(files: Vec<T>) -> Option<T> {
    files.into_iter().next()
}

/// A file picked or dropped by the user.
pub struct SelectedFile {
    pub raw: RawFile,
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

impl SelectedFile {
    #[cfg(feature = "hydrate")]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_browser(file: web_sys::File) -> Self {
        let raw = RawFile {
            name: file.name(),
            size_bytes: file.size().max(0.0) as u64,
            mime_type: file.type_(),
            last_modified_ms: file.last_modified(),
        };
        Self { raw, file }
    }
}

/// Collect the files of a `FileList` (input change or drop).
#[cfg(feature = "hydrate")]
#[must_use]
pub fn files_from_list(list: Option<web_sys::FileList>) -> Vec<SelectedFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(SelectedFile::from_browser)
        .collect()
}
