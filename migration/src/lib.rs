pub use sea_orm_migration::prelude::*;

mod m20260410_091200_create_table_user_profiles;
mod m20260410_091430_create_library_tables;
mod m20260410_091650_create_table_cv_documents;
mod m20260410_091920_create_cv_inclusion_tables;
mod m20260410_092110_create_table_job_applications;
mod m20260410_092340_create_snapshot_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260410_091200_create_table_user_profiles::Migration),
            Box::new(m20260410_091430_create_library_tables::Migration),
            Box::new(m20260410_091650_create_table_cv_documents::Migration),
            Box::new(m20260410_091920_create_cv_inclusion_tables::Migration),
            Box::new(m20260410_092110_create_table_job_applications::Migration),
            Box::new(m20260410_092340_create_snapshot_tables::Migration),
        ]
    }
}
