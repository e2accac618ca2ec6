pub mod create_snapshot_service;
pub mod delete_snapshot_service;
pub mod get_application_snapshot_service;
pub mod get_snapshot_service;

pub use create_snapshot_service::CreateSnapshotService;
pub use delete_snapshot_service::DeleteSnapshotService;
pub use get_application_snapshot_service::GetApplicationSnapshotService;
pub use get_snapshot_service::GetSnapshotService;
