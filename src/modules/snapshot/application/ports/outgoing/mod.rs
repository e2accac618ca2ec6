pub mod snapshot_query;
pub mod snapshot_repository;

pub use snapshot_query::*;
pub use snapshot_repository::*;
