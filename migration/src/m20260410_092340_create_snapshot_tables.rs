use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create cv_snapshots table
        // =====================================================
        // source_cv_id is a historical reference only: no FK, the CV may be
        // deleted later without touching the snapshot. application_id does
        // carry an FK so an application takes its snapshot with it.
        manager
            .create_table(
                Table::create()
                    .table(CvSnapshots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CvSnapshots::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(CvSnapshots::UserId).uuid().not_null())
                    .col(ColumnDef::new(CvSnapshots::SourceCvId).uuid().not_null())
                    .col(ColumnDef::new(CvSnapshots::ApplicationId).uuid())
                    .col(ColumnDef::new(CvSnapshots::Title).string_len(150).not_null())
                    .col(
                        ColumnDef::new(CvSnapshots::Template)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CvSnapshots::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cv_snapshots_application_id")
                            .from(CvSnapshots::Table, CvSnapshots::ApplicationId)
                            .to(JobApplications::Table, JobApplications::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create snapshot_headers table (1:1 with cv_snapshots)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(SnapshotHeaders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SnapshotHeaders::SnapshotId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SnapshotHeaders::FullName).string_len(150))
                    .col(ColumnDef::new(SnapshotHeaders::Headline).string_len(200))
                    .col(ColumnDef::new(SnapshotHeaders::Email).string_len(255))
                    .col(ColumnDef::new(SnapshotHeaders::Phone).string_len(50))
                    .col(ColumnDef::new(SnapshotHeaders::Location).string_len(150))
                    .col(ColumnDef::new(SnapshotHeaders::Website).text())
                    .col(ColumnDef::new(SnapshotHeaders::Summary).text())
                    .col(ColumnDef::new(SnapshotHeaders::PhotoUrl).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_snapshot_headers_snapshot_id")
                            .from(SnapshotHeaders::Table, SnapshotHeaders::SnapshotId)
                            .to(CvSnapshots::Table, CvSnapshots::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Child entry tables
        // =====================================================
        // Value copies of the composed items. Deliberately no FK back to the
        // library tables: a snapshot row must survive any library edit or
        // delete. The only FK points at the owning snapshot.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE IF NOT EXISTS snapshot_work_entries (
                    id uuid NOT NULL PRIMARY KEY DEFAULT gen_random_uuid(),
                    snapshot_id uuid NOT NULL,
                    company varchar(150) NOT NULL,
                    role varchar(150) NOT NULL,
                    location varchar(150),
                    start_date date NOT NULL,
                    end_date date,
                    is_current boolean NOT NULL DEFAULT false,
                    summary text,
                    sort_order integer NOT NULL,
                    CONSTRAINT fk_snapshot_work_entries_snapshot_id
                        FOREIGN KEY (snapshot_id) REFERENCES cv_snapshots (id)
                        ON DELETE CASCADE ON UPDATE CASCADE
                );

                CREATE TABLE IF NOT EXISTS snapshot_education_entries (
                    id uuid NOT NULL PRIMARY KEY DEFAULT gen_random_uuid(),
                    snapshot_id uuid NOT NULL,
                    institution varchar(200) NOT NULL,
                    degree varchar(150) NOT NULL,
                    field_of_study varchar(150),
                    start_date date,
                    end_date date,
                    description text,
                    sort_order integer NOT NULL,
                    CONSTRAINT fk_snapshot_education_entries_snapshot_id
                        FOREIGN KEY (snapshot_id) REFERENCES cv_snapshots (id)
                        ON DELETE CASCADE ON UPDATE CASCADE
                );

                CREATE TABLE IF NOT EXISTS snapshot_skill_entries (
                    id uuid NOT NULL PRIMARY KEY DEFAULT gen_random_uuid(),
                    snapshot_id uuid NOT NULL,
                    name varchar(100) NOT NULL,
                    proficiency varchar(50),
                    sort_order integer NOT NULL,
                    CONSTRAINT fk_snapshot_skill_entries_snapshot_id
                        FOREIGN KEY (snapshot_id) REFERENCES cv_snapshots (id)
                        ON DELETE CASCADE ON UPDATE CASCADE
                );

                CREATE TABLE IF NOT EXISTS snapshot_project_entries (
                    id uuid NOT NULL PRIMARY KEY DEFAULT gen_random_uuid(),
                    snapshot_id uuid NOT NULL,
                    name varchar(150) NOT NULL,
                    description text,
                    url text,
                    tech_stack jsonb NOT NULL DEFAULT '[]'::jsonb,
                    start_date date,
                    end_date date,
                    sort_order integer NOT NULL,
                    CONSTRAINT fk_snapshot_project_entries_snapshot_id
                        FOREIGN KEY (snapshot_id) REFERENCES cv_snapshots (id)
                        ON DELETE CASCADE ON UPDATE CASCADE
                );
                "#,
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_cv_snapshots_user_id
                ON cv_snapshots (user_id);

                CREATE INDEX IF NOT EXISTS idx_snapshot_work_entries_snapshot_id
                ON snapshot_work_entries (snapshot_id);
                CREATE INDEX IF NOT EXISTS idx_snapshot_education_entries_snapshot_id
                ON snapshot_education_entries (snapshot_id);
                CREATE INDEX IF NOT EXISTS idx_snapshot_skill_entries_snapshot_id
                ON snapshot_skill_entries (snapshot_id);
                CREATE INDEX IF NOT EXISTS idx_snapshot_project_entries_snapshot_id
                ON snapshot_project_entries (snapshot_id);
                "#,
            )
            .await?;

        // 0..1 snapshots per application. The partial unique index is the
        // backstop for the replace race: the loser of two concurrent creates
        // hits a unique violation instead of leaving two live snapshots.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS uq_cv_snapshots_application_id
                ON cv_snapshots (application_id)
                WHERE application_id IS NOT NULL;
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
                DROP INDEX IF EXISTS uq_cv_snapshots_application_id;
                DROP INDEX IF EXISTS idx_cv_snapshots_user_id;
                DROP INDEX IF EXISTS idx_snapshot_work_entries_snapshot_id;
                DROP INDEX IF EXISTS idx_snapshot_education_entries_snapshot_id;
                DROP INDEX IF EXISTS idx_snapshot_skill_entries_snapshot_id;
                DROP INDEX IF EXISTS idx_snapshot_project_entries_snapshot_id;

                DROP TABLE IF EXISTS snapshot_work_entries;
                DROP TABLE IF EXISTS snapshot_education_entries;
                DROP TABLE IF EXISTS snapshot_skill_entries;
                DROP TABLE IF EXISTS snapshot_project_entries;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SnapshotHeaders::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CvSnapshots::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CvSnapshots {
    Table,
    Id,
    UserId,
    SourceCvId,
    ApplicationId,
    Title,
    Template,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SnapshotHeaders {
    Table,
    SnapshotId,
    FullName,
    Headline,
    Email,
    Phone,
    Location,
    Website,
    Summary,
    PhotoUrl,
}

#[derive(DeriveIden)]
enum JobApplications {
    Table,
    Id,
}
