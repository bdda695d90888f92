// src/models.rs
mod file_record;
mod project;
mod walk_report;

pub use file_record::FileRecord;
pub use project::ProjectResult;
pub use walk_report::WalkReport;
