//! Per-project lookup from file id to record.

use crate::tree::node::{FileRecord, Project};
use crate::types::FileId;
use std::collections::HashMap;

/// Id index for one project, borrowed from the project's record set.
///
/// Duplicate ids resolve last-write-wins; the overwritten ids are kept so
/// callers can surface them as warnings.
#[derive(Debug)]
pub struct IdIndex<'a> {
    records: HashMap<&'a str, &'a FileRecord>,
    duplicates: Vec<FileId>,
}

impl<'a> IdIndex<'a> {
    pub fn build(project: &'a Project) -> Self {
        Self::from_records(&project.files)
    }

    pub fn from_records(files: &'a [FileRecord]) -> Self {
        let mut records = HashMap::with_capacity(files.len());
        let mut duplicates = Vec::new();
        for file in files {
            if records.insert(file.id.as_str(), file).is_some() {
                duplicates.push(file.id.clone());
            }
        }
        IdIndex {
            records,
            duplicates,
        }
    }

    /// Resolve an id; `None` for a dangling reference.
    pub fn get(&self, id: &str) -> Option<&'a FileRecord> {
        self.records.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids that appeared more than once in the record set.
    pub fn duplicate_ids(&self) -> &[FileId] {
        &self.duplicates
    }
}
