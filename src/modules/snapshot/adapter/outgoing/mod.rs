pub mod sea_orm_entity;
pub mod snapshot_query_postgres;
pub mod snapshot_repository_postgres;

pub use snapshot_query_postgres::SnapshotQueryPostgres;
pub use snapshot_repository_postgres::SnapshotRepositoryPostgres;
