use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create library_work_experiences table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(WorkExperiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkExperiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(WorkExperiences::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(WorkExperiences::Company)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::Role)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkExperiences::Location).string_len(150))
                    .col(ColumnDef::new(WorkExperiences::StartDate).date().not_null())
                    .col(ColumnDef::new(WorkExperiences::EndDate).date())
                    .col(
                        ColumnDef::new(WorkExperiences::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(WorkExperiences::Summary).text())
                    .col(
                        ColumnDef::new(WorkExperiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WorkExperiences::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create library_educations table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Educations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Educations::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Educations::Institution)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Educations::Degree).string_len(150).not_null())
                    .col(ColumnDef::new(Educations::FieldOfStudy).string_len(150))
                    .col(ColumnDef::new(Educations::StartDate).date())
                    .col(ColumnDef::new(Educations::EndDate).date())
                    .col(ColumnDef::new(Educations::Description).text())
                    .col(
                        ColumnDef::new(Educations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Educations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create library_skills table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Skills::UserId).uuid().not_null())
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::Proficiency).string_len(50))
                    .col(
                        ColumnDef::new(Skills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Skills::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create library_projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::UserId).uuid().not_null())
                    .col(ColumnDef::new(Projects::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Projects::Description).text())
                    .col(ColumnDef::new(Projects::Url).text())
                    .col(ColumnDef::new(Projects::TechStack).json_binary().not_null())
                    .col(ColumnDef::new(Projects::StartDate).date())
                    .col(ColumnDef::new(Projects::EndDate).date())
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
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

        // Fast per-owner listing for all four kinds
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_library_work_experiences_user_id
                ON library_work_experiences (user_id);
                CREATE INDEX IF NOT EXISTS idx_library_educations_user_id
                ON library_educations (user_id);
                CREATE INDEX IF NOT EXISTS idx_library_skills_user_id
                ON library_skills (user_id);
                CREATE INDEX IF NOT EXISTS idx_library_projects_user_id
                ON library_projects (user_id);
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
                DROP INDEX IF EXISTS idx_library_work_experiences_user_id;
                DROP INDEX IF EXISTS idx_library_educations_user_id;
                DROP INDEX IF EXISTS idx_library_skills_user_id;
                DROP INDEX IF EXISTS idx_library_projects_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkExperiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WorkExperiences {
    #[sea_orm(iden = "library_work_experiences")]
    Table,
    Id,
    UserId,
    Company,
    Role,
    Location,
    StartDate,
    EndDate,
    IsCurrent,
    Summary,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Educations {
    #[sea_orm(iden = "library_educations")]
    Table,
    Id,
    UserId,
    Institution,
    Degree,
    FieldOfStudy,
    StartDate,
    EndDate,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Skills {
    #[sea_orm(iden = "library_skills")]
    Table,
    Id,
    UserId,
    Name,
    Proficiency,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Projects {
    #[sea_orm(iden = "library_projects")]
    Table,
    Id,
    UserId,
    Name,
    Description,
    Url,
    TechStack,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}
