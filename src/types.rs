//! Core types shared across the listing and materialization layers.

/// FileId: identifier of a file record, unique within one project
pub type FileId = String;

/// ProjectId: public identifier of a sketch, used as its output directory name
pub type ProjectId = String;

/// Reserved folder name marking a project's root record
pub const ROOT_FOLDER_NAME: &str = "root";
