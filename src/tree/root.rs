//! Root folder lookup.

use crate::tree::node::{FileRecord, Project};

/// First record marked as root, in listing order.
///
/// Listings normally carry exactly one root; when several exist the first
/// one wins, and `None` means the project has nothing to materialize.
pub fn locate_root(project: &Project) -> Option<&FileRecord> {
    project.files.iter().find(|file| file.is_root_marker())
}

/// Number of root markers, used to warn about ambiguous listings.
pub fn root_marker_count(project: &Project) -> usize {
    project.files.iter().filter(|file| file.is_root_marker()).count()
}
