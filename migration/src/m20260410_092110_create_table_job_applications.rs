use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create job_applications table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(JobApplications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobApplications::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(JobApplications::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(JobApplications::Company)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobApplications::Position)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobApplications::Status)
                            .string_len(50)
                            .not_null()
                            .default("draft"),
                    )
                    .col(ColumnDef::new(JobApplications::JobUrl).text())
                    .col(ColumnDef::new(JobApplications::Notes).text())
                    .col(ColumnDef::new(JobApplications::AppliedAt).date())
                    .col(
                        ColumnDef::new(JobApplications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(JobApplications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast per-owner listing
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_job_applications_user_id
                ON job_applications (user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_job_applications_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JobApplications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobApplications {
    Table,
    Id,
    UserId,
    Company,
    Position,
    Status,
    JobUrl,
    Notes,
    AppliedAt,
    CreatedAt,
    UpdatedAt,
}
