//! File record and project types for the decoded listing.

use crate::types::{FileId, ProjectId, ROOT_FOLDER_NAME};
use serde::Serialize;

/// What a file record materializes into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FileKind {
    /// Directory; children are ids resolved through the project's index.
    Folder { children: Vec<FileId> },
    /// File whose bytes are carried in the listing.
    InlineFile { content: String },
    /// File whose bytes live at a remote URL.
    RemoteFile { url: String },
}

/// One node of a project's logical filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    pub kind: FileKind,
    pub created_at: String,
    pub updated_at: String,
    pub is_selected_file: bool,
}

impl FileRecord {
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, FileKind::Folder { .. })
    }

    /// True for the folder named `root`, which contributes no path segment.
    pub fn is_root_marker(&self) -> bool {
        self.is_folder() && self.name == ROOT_FOLDER_NAME
    }

    pub fn children(&self) -> &[FileId] {
        match &self.kind {
            FileKind::Folder { children } => children,
            _ => &[],
        }
    }
}

/// A sketch and its flat file record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Internal database id (`_id` on the wire)
    pub internal_id: String,
    pub id: ProjectId,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub files: Vec<FileRecord>,
}
