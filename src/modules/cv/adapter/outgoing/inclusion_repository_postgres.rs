use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::outgoing::{
    CvSection, InclusionRepository, InclusionRepositoryError,
};

/// Table pair for one section: the link table and the library table it
/// points at. The four relations are structurally identical, so every
/// statement below is built from this pair.
fn tables(section: CvSection) -> (&'static str, &'static str) {
    match section {
        CvSection::WorkExperience => ("cv_work_inclusions", "library_work_experiences"),
        CvSection::Education => ("cv_education_inclusions", "library_educations"),
        CvSection::Skill => ("cv_skill_inclusions", "library_skills"),
        CvSection::Project => ("cv_project_inclusions", "library_projects"),
    }
}

#[derive(Clone)]
pub struct InclusionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InclusionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> InclusionRepositoryError {
        InclusionRepositoryError::DatabaseError(e.to_string())
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Guarded insert:
    /// - CV must exist and belong to owner
    /// - item must exist and belong to owner
    /// - on conflict (cv_id, item_id) do nothing, resolved by the probe
    fn guarded_insert_stmt(
        owner: Uuid,
        cv_id: Uuid,
        section: CvSection,
        item_id: Uuid,
        sort_order: i32,
    ) -> Statement {
        let (link_table, item_table) = tables(section);
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                INSERT INTO {link_table} (cv_id, item_id, sort_order)
                SELECT c.id, i.id, $4
                FROM cv_documents c
                JOIN {item_table} i
                  ON i.id = $3
                 AND i.user_id = $1
                WHERE c.id = $2
                  AND c.user_id = $1
                ON CONFLICT (cv_id, item_id) DO NOTHING
                "#
            ),
            vec![
                owner.into(),
                cv_id.into(),
                item_id.into(),
                sort_order.into(),
            ],
        )
    }

    /// Probe for why a guarded insert affected no rows:
    /// - cv_ok: CV exists and is owned
    /// - item_ok: item exists and is owned
    /// - link_exists: the pair is already present
    fn probe_stmt(owner: Uuid, cv_id: Uuid, section: CvSection, item_id: Uuid) -> Statement {
        let (link_table, item_table) = tables(section);
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT
                  EXISTS (
                    SELECT 1
                    FROM cv_documents c
                    WHERE c.id = $2
                      AND c.user_id = $1
                  ) AS cv_ok,
                  EXISTS (
                    SELECT 1
                    FROM {item_table} i
                    WHERE i.id = $3
                      AND i.user_id = $1
                  ) AS item_ok,
                  EXISTS (
                    SELECT 1
                    FROM {link_table} l
                    WHERE l.cv_id = $2
                      AND l.item_id = $3
                  ) AS link_exists
                "#
            ),
            vec![owner.into(), cv_id.into(), item_id.into()],
        )
    }

    /// Resolve the zero-rows outcome of the guarded insert.
    /// Priority: CvNotFound, then ItemNotFound, then AlreadyIncluded.
    async fn resolve_insert_failure(
        &self,
        owner: Uuid,
        cv_id: Uuid,
        section: CvSection,
        item_id: Uuid,
    ) -> InclusionRepositoryError {
        let row = match self
            .db
            .query_one(Self::probe_stmt(owner, cv_id, section, item_id))
            .await
        {
            Ok(Some(row)) => row,
            Ok(None) => {
                return InclusionRepositoryError::DatabaseError(
                    "Probe query returned no rows".to_string(),
                )
            }
            Err(e) => return Self::map_db_err(e),
        };

        let cv_ok: bool = row.try_get("", "cv_ok").unwrap_or(false);
        let item_ok: bool = row.try_get("", "item_ok").unwrap_or(false);
        let link_exists: bool = row.try_get("", "link_exists").unwrap_or(false);

        if !cv_ok {
            return InclusionRepositoryError::CvNotFound;
        }
        if !item_ok {
            return InclusionRepositoryError::ItemNotFound;
        }
        if link_exists {
            return InclusionRepositoryError::AlreadyIncluded;
        }

        InclusionRepositoryError::DatabaseError(
            "Guarded insert affected no rows for an unknown reason".to_string(),
        )
    }
}

#[async_trait]
impl InclusionRepository for InclusionRepositoryPostgres {
    async fn add(
        &self,
        owner: UserId,
        cv_id: Uuid,
        section: CvSection,
        item_id: Uuid,
        sort_order: i32,
    ) -> Result<(), InclusionRepositoryError> {
        let owner = owner.as_uuid();

        let result = self
            .db
            .execute(Self::guarded_insert_stmt(
                owner, cv_id, section, item_id, sort_order,
            ))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        Err(self
            .resolve_insert_failure(owner, cv_id, section, item_id)
            .await)
    }

    async fn reorder(
        &self,
        owner: UserId,
        cv_id: Uuid,
        section: CvSection,
        item_id: Uuid,
        sort_order: i32,
    ) -> Result<(), InclusionRepositoryError> {
        let (link_table, _) = tables(section);

        let result = self
            .db
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                format!(
                    r#"
                    UPDATE {link_table} l
                    SET sort_order = $4
                    FROM cv_documents c
                    WHERE c.id = l.cv_id
                      AND c.user_id = $1
                      AND l.cv_id = $2
                      AND l.item_id = $3
                    "#
                ),
                vec![
                    owner.as_uuid().into(),
                    cv_id.into(),
                    item_id.into(),
                    sort_order.into(),
                ],
            ))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(InclusionRepositoryError::LinkNotFound);
        }

        Ok(())
    }

    async fn remove(
        &self,
        owner: UserId,
        cv_id: Uuid,
        section: CvSection,
        item_id: Uuid,
    ) -> Result<(), InclusionRepositoryError> {
        let (link_table, _) = tables(section);

        let result = self
            .db
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                format!(
                    r#"
                    DELETE FROM {link_table} l
                    USING cv_documents c
                    WHERE c.id = l.cv_id
                      AND c.user_id = $1
                      AND l.cv_id = $2
                      AND l.item_id = $3
                    "#
                ),
                vec![owner.as_uuid().into(), cv_id.into(), item_id.into()],
            ))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(InclusionRepositoryError::LinkNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn args() -> (UserId, Uuid, Uuid) {
        (UserId::from(Uuid::new_v4()), Uuid::new_v4(), Uuid::new_v4())
    }

    #[tokio::test]
    async fn add_succeeds_when_guarded_insert_lands() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = InclusionRepositoryPostgres::new(Arc::new(db));
        let (owner, cv_id, item_id) = args();

        assert!(repo
            .add(owner, cv_id, CvSection::Skill, item_id, 3)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn reorder_reports_missing_link() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = InclusionRepositoryPostgres::new(Arc::new(db));
        let (owner, cv_id, item_id) = args();

        let err = repo
            .reorder(owner, cv_id, CvSection::Project, item_id, 7)
            .await
            .unwrap_err();

        assert!(matches!(err, InclusionRepositoryError::LinkNotFound));
    }

    #[tokio::test]
    async fn remove_reports_missing_link() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = InclusionRepositoryPostgres::new(Arc::new(db));
        let (owner, cv_id, item_id) = args();

        let err = repo
            .remove(owner, cv_id, CvSection::Education, item_id)
            .await
            .unwrap_err();

        assert!(matches!(err, InclusionRepositoryError::LinkNotFound));
    }
}
