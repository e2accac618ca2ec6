use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create user_profiles table
        // =====================================================
        // One row per user. Written by the (external) profile service;
        // this backend only reads it at snapshot time.
        // user_id comes from the external identity layer, so no FK target.
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfiles::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserProfiles::FullName).string_len(150))
                    .col(ColumnDef::new(UserProfiles::Headline).string_len(200))
                    .col(ColumnDef::new(UserProfiles::Email).string_len(255))
                    .col(ColumnDef::new(UserProfiles::Phone).string_len(50))
                    .col(ColumnDef::new(UserProfiles::Location).string_len(150))
                    .col(ColumnDef::new(UserProfiles::Website).text())
                    .col(ColumnDef::new(UserProfiles::Summary).text())
                    .col(ColumnDef::new(UserProfiles::PhotoUrl).text())
                    .col(
                        ColumnDef::new(UserProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserProfiles {
    Table,
    UserId,
    FullName,
    Headline,
    Email,
    Phone,
    Location,
    Website,
    Summary,
    PhotoUrl,
    CreatedAt,
    UpdatedAt,
}
