//! Structural checks on a project's record set.
//!
//! Nothing here rewrites names or paths: findings are reported as warnings
//! and the materializer reproduces the literal names it was given.

use crate::tree::index::IdIndex;
use crate::tree::node::Project;
use crate::tree::root::root_marker_count;
use std::collections::HashSet;

/// Validation findings for one project.
#[derive(Debug, Clone, Default)]
pub struct ProjectValidation {
    pub warnings: Vec<String>,
}

impl ProjectValidation {
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Check names, duplicate ids, duplicate siblings, and root marker count.
pub fn validate_project(project: &Project, index: &IdIndex<'_>) -> ProjectValidation {
    let mut result = ProjectValidation::default();

    match root_marker_count(project) {
        0 => result.add_warning("No root folder found".to_string()),
        1 => {}
        n => result.add_warning(format!(
            "Found {} root folders; using the first in listing order",
            n
        )),
    }

    for id in index.duplicate_ids() {
        result.add_warning(format!("Duplicate file id '{}'; last record wins", id));
    }

    for file in &project.files {
        if file.name.is_empty() {
            result.add_warning(format!("File '{}' has an empty name", file.id));
        } else if file.name == "." || file.name == ".." {
            result.add_warning(format!(
                "File '{}' has reserved name '{}'",
                file.id, file.name
            ));
        } else if file.name.contains('/') || file.name.contains('\\') {
            result.add_warning(format!(
                "File '{}' name '{}' contains a path separator",
                file.id, file.name
            ));
        }

        let mut seen = HashSet::new();
        for child_id in file.children() {
            if let Some(child) = index.get(child_id) {
                if !seen.insert(child.name.as_str()) {
                    result.add_warning(format!(
                        "Folder '{}' has more than one child named '{}'",
                        file.name, child.name
                    ));
                }
            }
        }
    }

    result
}
