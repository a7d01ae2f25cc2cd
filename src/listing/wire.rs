//! Wire shape of the editor's project listing and its decoding into
//! [`Project`] values.

use crate::error::ApiError;
use crate::tree::node::{FileKind, FileRecord, Project};
use serde::Deserialize;

const FOLDER_FILE_TYPE: &str = "folder";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    file_type: Option<String>,
    #[serde(default)]
    children: Option<Vec<String>>,
    #[serde(default)]
    is_selected_file: Option<bool>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireProject {
    #[serde(rename = "_id", default)]
    internal_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    files: Option<Vec<WireFile>>,
}

impl WireFile {
    fn into_record(self) -> FileRecord {
        let url = self.url.unwrap_or_default();
        let kind = if self.file_type.as_deref() == Some(FOLDER_FILE_TYPE) {
            FileKind::Folder {
                children: self.children.unwrap_or_default(),
            }
        } else if !url.is_empty() {
            FileKind::RemoteFile { url }
        } else {
            FileKind::InlineFile {
                content: self.content.unwrap_or_default(),
            }
        };

        FileRecord {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            kind,
            created_at: self.created_at.unwrap_or_default(),
            updated_at: self.updated_at.unwrap_or_default(),
            is_selected_file: self.is_selected_file.unwrap_or(false),
        }
    }
}

impl WireProject {
    fn into_project(self) -> Project {
        Project {
            internal_id: self.internal_id.unwrap_or_default(),
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_default(),
            updated_at: self.updated_at.unwrap_or_default(),
            files: self
                .files
                .unwrap_or_default()
                .into_iter()
                .map(WireFile::into_record)
                .collect(),
        }
    }
}

/// Decode a listing payload into projects, preserving listing order.
pub fn decode_listing(payload: &[u8]) -> Result<Vec<Project>, ApiError> {
    let projects: Vec<WireProject> = serde_json::from_slice(payload)?;
    Ok(projects.into_iter().map(WireProject::into_project).collect())
}
