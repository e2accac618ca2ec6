pub mod create_snapshot;
pub mod delete_snapshot;
pub mod get_application_snapshot;
pub mod get_snapshot;
