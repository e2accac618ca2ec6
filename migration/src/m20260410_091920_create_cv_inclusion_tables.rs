use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// The four inclusion tables are structurally identical: composite PK on
// (cv_id, item_id) makes the pair unique, FKs cascade from both parents so
// deleting a CV or a library item removes the link rows atomically.
struct JoinSpec {
    table: &'static str,
    item_table: &'static str,
}

const JOIN_TABLES: [JoinSpec; 4] = [
    JoinSpec {
        table: "cv_work_inclusions",
        item_table: "library_work_experiences",
    },
    JoinSpec {
        table: "cv_education_inclusions",
        item_table: "library_educations",
    },
    JoinSpec {
        table: "cv_skill_inclusions",
        item_table: "library_skills",
    },
    JoinSpec {
        table: "cv_project_inclusions",
        item_table: "library_projects",
    },
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for spec in JOIN_TABLES {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    r#"
                    CREATE TABLE IF NOT EXISTS {table} (
                        cv_id uuid NOT NULL,
                        item_id uuid NOT NULL,
                        sort_order integer NOT NULL,
                        created_at timestamptz NOT NULL DEFAULT CURRENT_TIMESTAMP,
                        PRIMARY KEY (cv_id, item_id),
                        CONSTRAINT fk_{table}_cv_id
                            FOREIGN KEY (cv_id) REFERENCES cv_documents (id)
                            ON DELETE CASCADE ON UPDATE CASCADE,
                        CONSTRAINT fk_{table}_item_id
                            FOREIGN KEY (item_id) REFERENCES {item_table} (id)
                            ON DELETE CASCADE ON UPDATE CASCADE
                    );

                    CREATE INDEX IF NOT EXISTS idx_{table}_item_id
                    ON {table} (item_id);
                    "#,
                    table = spec.table,
                    item_table = spec.item_table,
                ))
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for spec in JOIN_TABLES {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    r#"
                    DROP INDEX IF EXISTS idx_{table}_item_id;
                    DROP TABLE IF EXISTS {table};
                    "#,
                    table = spec.table,
                ))
                .await?;
        }

        Ok(())
    }
}
