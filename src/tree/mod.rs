//! Project file trees: decoded records, the id index, root lookup, and the
//! materializer that writes a project to disk.

pub mod index;
pub mod materialize;
pub mod node;
pub mod root;
pub mod validation;

pub use index::IdIndex;
pub use materialize::{join_literal, ProjectReport, SkippedNode, TreeMaterializer};
pub use node::{FileKind, FileRecord, Project};
pub use root::locate_root;
pub use validation::{validate_project, ProjectValidation};
