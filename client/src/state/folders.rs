//! Folder list for the multi-document chat view.
//!
//! DESIGN
//! ======
//! Folders group uploaded files by name only; file contents live on the
//! remote service. The chat session is separate state, so switching
//! folders never touches the conversation.

#[cfg(test)]
#[path = "folders_test.rs"]
mod folders_test;

use crate::state::document::RawFile;

/// Metadata of a file uploaded into a folder.
#[derive(Clone, Debug, PartialEq)]
pub struct FileSummary {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl From<&RawFile> for FileSummary {
    fn from(raw: &RawFile) -> Self {
        Self { name: raw.name.clone(), size_bytes: raw.size_bytes, mime_type: raw.mime_type.clone() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatFolder {
    pub id: String,
    pub name: String,
    pub files: Vec<FileSummary>,
}

#[derive(Clone, Debug, Default)]
pub struct FolderState {
    pub folders: Vec<ChatFolder>,
    pub active_id: Option<String>,
}

impl FolderState {
    /// Create a folder and make it active. Blank names are ignored.
    pub fn create_folder(&mut self, name: &str) -> Option<&ChatFolder> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let folder = ChatFolder { id: uuid::Uuid::new_v4().to_string(), name: name.to_owned(), files: Vec::new() };
        self.active_id = Some(folder.id.clone());
        self.folders.push(folder);
        self.folders.last()
    }

    /// Make `id` the active folder. Returns false for unknown ids.
    pub fn select(&mut self, id: &str) -> bool {
        if self.folders.iter().any(|f| f.id == id) {
            self.active_id = Some(id.to_owned());
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&ChatFolder> {
        let id = self.active_id.as_deref()?;
        self.folders.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_deref() == Some(id)
    }

    /// Whether the active folder holds at least one file.
    #[must_use]
    pub fn active_has_files(&self) -> bool {
        self.active().is_some_and(|f| !f.files.is_empty())
    }

    /// Record an uploaded file in the active folder. Returns false when no
    /// folder is active.
    pub fn add_file(&mut self, file: FileSummary) -> bool {
        let Some(id) = self.active_id.clone() else {
            return false;
        };
        match self.folders.iter_mut().find(|f| f.id == id) {
            Some(folder) => {
                folder.files.push(file);
                true
            }
            None => false,
        }
    }
}
