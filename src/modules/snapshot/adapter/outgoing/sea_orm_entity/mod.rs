pub mod snapshot_education_entries;
pub mod snapshot_headers;
pub mod snapshot_project_entries;
pub mod snapshot_skill_entries;
pub mod snapshot_work_entries;
pub mod snapshots;
