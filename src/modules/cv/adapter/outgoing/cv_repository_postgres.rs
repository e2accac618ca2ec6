use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, QueryFilter, QueryOrder, Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::outgoing::{
    CreateCvData, CvRepository, CvRepositoryError, CvResult, PatchCvData,
};
use crate::shared::patch::PatchField;

use super::sea_orm_entity::cv_documents::{
    ActiveModel as CvActiveModel, Column as CvColumn, Entity as CvEntity, Model as CvModel,
};

const DEFAULT_TEMPLATE: &str = "classic";

#[derive(Debug, Clone)]
pub struct CvRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CvRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> CvRepositoryError {
        CvRepositoryError::DatabaseError(e.to_string())
    }

    /// Demote whatever CV currently carries the default flag for this user.
    fn clear_default_stmt(owner: Uuid, keep: Option<Uuid>) -> Statement {
        match keep {
            Some(keep) => Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"
                UPDATE cv_documents
                SET is_default = false, updated_at = NOW()
                WHERE user_id = $1 AND is_default AND id <> $2
                "#,
                vec![owner.into(), keep.into()],
            ),
            None => Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"
                UPDATE cv_documents
                SET is_default = false, updated_at = NOW()
                WHERE user_id = $1 AND is_default
                "#,
                vec![owner.into()],
            ),
        }
    }

    async fn owner_has_cv<C>(conn: &C, owner: Uuid) -> Result<bool, CvRepositoryError>
    where
        C: ConnectionTrait,
    {
        #[derive(FromQueryResult)]
        struct HasAny {
            has_any: bool,
        }

        let row = HasAny::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT EXISTS (SELECT 1 FROM cv_documents WHERE user_id = $1) AS has_any"#,
            vec![owner.into()],
        ))
        .one(conn)
        .await
        .map_err(Self::map_db_err)?;

        Ok(row.map(|r| r.has_any).unwrap_or(false))
    }
}

#[async_trait]
impl CvRepository for CvRepositoryPostgres {
    async fn create_cv(&self, data: CreateCvData) -> Result<CvResult, CvRepositoryError> {
        let owner = data.owner.as_uuid();
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        // First CV for a user becomes the default automatically; an explicit
        // request demotes the current default inside this transaction.
        let is_default = if data.is_default {
            txn.execute(Self::clear_default_stmt(owner, None))
                .await
                .map_err(Self::map_db_err)?;
            true
        } else {
            !Self::owner_has_cv(&txn, owner).await?
        };

        let now = chrono::Utc::now().fixed_offset();
        let active = CvActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner),
            title: Set(data.title),
            template: Set(data
                .template
                .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string())),
            is_default: Set(is_default),
            override_summary: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted: CvModel = CvEntity::insert(active)
            .exec_with_returning(&txn)
            .await
            .map_err(Self::map_db_err)?;

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<CvResult>, CvRepositoryError> {
        let models = CvEntity::find()
            .filter(CvColumn::UserId.eq(owner.as_uuid()))
            .order_by_desc(CvColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn patch_cv(
        &self,
        owner: UserId,
        cv_id: Uuid,
        data: PatchCvData,
    ) -> Result<CvResult, CvRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let existing = CvEntity::find_by_id(cv_id)
            .filter(CvColumn::UserId.eq(owner.as_uuid()))
            .one(&txn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(CvRepositoryError::NotFound)?;

        // Clear-then-set under one transaction keeps the per-user default
        // unique at every commit point.
        if data.is_default == Some(true) {
            txn.execute(Self::clear_default_stmt(owner.as_uuid(), Some(cv_id)))
                .await
                .map_err(Self::map_db_err)?;
        }

        let mut active: CvActiveModel = existing.into();

        if let PatchField::Value(title) = data.title {
            active.title = Set(title);
        }
        if let PatchField::Value(template) = data.template {
            active.template = Set(template);
        }
        match data.override_summary {
            PatchField::Unset => {}
            PatchField::Null => active.override_summary = Set(None),
            PatchField::Value(summary) => active.override_summary = Set(Some(summary)),
        }
        if let Some(is_default) = data.is_default {
            active.is_default = Set(is_default);
        }
        active.updated_at = Set(chrono::Utc::now().fixed_offset());

        let updated = active.update(&txn).await.map_err(Self::map_db_err)?;

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn delete_cv(&self, owner: UserId, cv_id: Uuid) -> Result<(), CvRepositoryError> {
        #[derive(FromQueryResult)]
        struct IdResult {
            #[allow(dead_code)]
            id: Uuid,
        }

        // Inclusion rows go with the document via the cascading FKs; the
        // library rows they pointed at stay untouched.
        let result = IdResult::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"DELETE FROM cv_documents WHERE id = $1 AND user_id = $2 RETURNING id"#,
            [cv_id.into(), owner.as_uuid().into()],
        ))
        .one(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        if result.is_none() {
            return Err(CvRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn cv_model(user_id: Uuid, is_default: bool) -> CvModel {
        let now = Utc::now().fixed_offset();
        CvModel {
            id: Uuid::new_v4(),
            user_id,
            title: "Backend Resume".to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            is_default,
            override_summary: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn patch_returns_not_found_for_foreign_cv() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<CvModel>::new()])
            .into_connection();

        let repo = CvRepositoryPostgres::new(Arc::new(db));
        let err = repo
            .patch_cv(
                UserId::from(Uuid::new_v4()),
                Uuid::new_v4(),
                PatchCvData::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CvRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn create_with_explicit_default_clears_previous_default_first() {
        let user_id = Uuid::new_v4();
        let inserted = cv_model(user_id, true);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // clear_default_stmt
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            // exec_with_returning
            .append_query_results([vec![inserted.clone()]])
            .into_connection();

        let repo = CvRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create_cv(CreateCvData {
                owner: UserId::from(user_id),
                title: "Backend Resume".to_string(),
                template: None,
                is_default: true,
            })
            .await
            .unwrap();

        assert!(result.is_default);
        assert_eq!(result.owner.as_uuid(), user_id);
    }

    #[tokio::test]
    async fn list_for_owner_maps_models() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![cv_model(user_id, true), cv_model(user_id, false)]])
            .into_connection();

        let repo = CvRepositoryPostgres::new(Arc::new(db));
        let cvs = repo.list_for_owner(UserId::from(user_id)).await.unwrap();

        assert_eq!(cvs.len(), 2);
        assert!(cvs[0].is_default);
    }
}
