use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create cv_documents table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CvDocuments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CvDocuments::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(CvDocuments::UserId).uuid().not_null())
                    .col(ColumnDef::new(CvDocuments::Title).string_len(150).not_null())
                    .col(
                        ColumnDef::new(CvDocuments::Template)
                            .string_len(50)
                            .not_null()
                            .default("classic"),
                    )
                    .col(
                        ColumnDef::new(CvDocuments::IsDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(CvDocuments::OverrideSummary).text())
                    .col(
                        ColumnDef::new(CvDocuments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CvDocuments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Fast per-owner listing
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_cv_documents_user_id
                ON cv_documents (user_id);
                "#,
            )
            .await?;

        // Storage-level backstop: at most one default CV per user
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS uq_cv_documents_default_per_user
                ON cv_documents (user_id)
                WHERE is_default;
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
                DROP INDEX IF EXISTS idx_cv_documents_user_id;
                DROP INDEX IF EXISTS uq_cv_documents_default_per_user;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CvDocuments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CvDocuments {
    Table,
    Id,
    UserId,
    Title,
    Template,
    IsDefault,
    OverrideSummary,
    CreatedAt,
    UpdatedAt,
}
