use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, Set, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::outgoing::{
    CreateWorkExperienceData, LibraryRepositoryError, PatchWorkExperienceData,
    WorkExperienceRepository, WorkExperienceResult,
};
use crate::shared::patch::PatchField;

use super::sea_orm_entity::work_experiences::{
    ActiveModel as WorkActiveModel, Column as WorkColumn, Entity as WorkEntity,
};

#[derive(Debug, Clone)]
pub struct WorkExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl WorkExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: sea_orm::DbErr) -> LibraryRepositoryError {
        LibraryRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl WorkExperienceRepository for WorkExperienceRepositoryPostgres {
    async fn create(
        &self,
        data: CreateWorkExperienceData,
    ) -> Result<WorkExperienceResult, LibraryRepositoryError> {
        let now = chrono::Utc::now().fixed_offset();

        let active = WorkActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            company: Set(data.company),
            role: Set(data.role),
            location: Set(data.location),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            is_current: Set(data.is_current),
            summary: Set(data.summary),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<WorkExperienceResult>, LibraryRepositoryError> {
        let models = WorkEntity::find()
            .filter(WorkColumn::UserId.eq(owner.as_uuid()))
            .order_by_desc(WorkColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchWorkExperienceData,
    ) -> Result<WorkExperienceResult, LibraryRepositoryError> {
        // Ownership is part of the lookup, so a foreign row reads as absent.
        let existing = WorkEntity::find_by_id(id)
            .filter(WorkColumn::UserId.eq(owner.as_uuid()))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(LibraryRepositoryError::NotFound)?;

        let mut active: WorkActiveModel = existing.into();

        if let PatchField::Value(company) = data.company {
            active.company = Set(company);
        }
        if let PatchField::Value(role) = data.role {
            active.role = Set(role);
        }
        match data.location {
            PatchField::Unset => {}
            PatchField::Null => active.location = Set(None),
            PatchField::Value(location) => active.location = Set(Some(location)),
        }
        if let PatchField::Value(start_date) = data.start_date {
            active.start_date = Set(start_date);
        }
        match data.end_date {
            PatchField::Unset => {}
            PatchField::Null => active.end_date = Set(None),
            PatchField::Value(end_date) => active.end_date = Set(Some(end_date)),
        }
        if let PatchField::Value(is_current) = data.is_current {
            active.is_current = Set(is_current);
        }
        match data.summary {
            PatchField::Unset => {}
            PatchField::Null => active.summary = Set(None),
            PatchField::Value(summary) => active.summary = Set(Some(summary)),
        }
        active.updated_at = Set(chrono::Utc::now().fixed_offset());

        let updated = active.update(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), LibraryRepositoryError> {
        #[derive(FromQueryResult)]
        struct IdResult {
            #[allow(dead_code)]
            id: Uuid,
        }

        // The cascading FKs on the inclusion tables remove this item from
        // every CV in the same statement.
        let result = IdResult::find_by_statement(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"DELETE FROM library_work_experiences WHERE id = $1 AND user_id = $2 RETURNING id"#,
            [id.into(), owner.as_uuid().into()],
        ))
        .one(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        if result.is_none() {
            return Err(LibraryRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::library::adapter::outgoing::sea_orm_entity::work_experiences::Model as WorkModel;

    fn work_model(user_id: Uuid) -> WorkModel {
        let now = Utc::now().fixed_offset();
        WorkModel {
            id: Uuid::new_v4(),
            user_id,
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            location: None,
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: None,
            is_current: true,
            summary: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_for_owner_maps_models() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![work_model(user_id)]])
            .into_connection();

        let repo = WorkExperienceRepositoryPostgres::new(Arc::new(db));
        let items = repo.list_for_owner(UserId::from(user_id)).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].company, "Acme");
        assert_eq!(items[0].owner.as_uuid(), user_id);
    }

    #[tokio::test]
    async fn patch_returns_not_found_for_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<WorkModel>::new()])
            .into_connection();

        let repo = WorkExperienceRepositoryPostgres::new(Arc::new(db));
        let err = repo
            .patch(
                UserId::from(Uuid::new_v4()),
                Uuid::new_v4(),
                PatchWorkExperienceData::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, LibraryRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn delete_returns_not_found_when_no_row_matches() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<WorkModel>::new()])
            .into_connection();

        let repo = WorkExperienceRepositoryPostgres::new(Arc::new(db));
        let err = repo
            .delete(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, LibraryRepositoryError::NotFound));
    }
}
