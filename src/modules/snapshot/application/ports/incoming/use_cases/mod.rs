pub mod create_snapshot;
pub mod delete_snapshot;
pub mod get_application_snapshot;
pub mod get_snapshot;

pub use create_snapshot::*;
pub use delete_snapshot::*;
pub use get_application_snapshot::*;
pub use get_snapshot::*;
