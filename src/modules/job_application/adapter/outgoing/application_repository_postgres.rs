use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, Set, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::job_application::application::ports::outgoing::{
    ApplicationRepository, ApplicationRepositoryError, ApplicationResult, CreateApplicationData,
    PatchApplicationData,
};
use crate::shared::patch::PatchField;

use super::sea_orm_entity::{
    ActiveModel as ApplicationActiveModel, Column as ApplicationColumn,
    Entity as ApplicationEntity,
};

#[derive(Debug, Clone)]
pub struct ApplicationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ApplicationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: sea_orm::DbErr) -> ApplicationRepositoryError {
        ApplicationRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl ApplicationRepository for ApplicationRepositoryPostgres {
    async fn create(
        &self,
        data: CreateApplicationData,
    ) -> Result<ApplicationResult, ApplicationRepositoryError> {
        let now = chrono::Utc::now().fixed_offset();

        let active = ApplicationActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            company: Set(data.company),
            position: Set(data.position),
            status: Set(data.status),
            job_url: Set(data.job_url),
            notes: Set(data.notes),
            applied_at: Set(data.applied_at),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<ApplicationResult>, ApplicationRepositoryError> {
        let models = ApplicationEntity::find()
            .filter(ApplicationColumn::UserId.eq(owner.as_uuid()))
            .order_by_desc(ApplicationColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn fetch_single(
        &self,
        owner: UserId,
        id: Uuid,
    ) -> Result<ApplicationResult, ApplicationRepositoryError> {
        let model = ApplicationEntity::find_by_id(id)
            .filter(ApplicationColumn::UserId.eq(owner.as_uuid()))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(ApplicationRepositoryError::NotFound)?;

        Ok(model.to_domain())
    }

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchApplicationData,
    ) -> Result<ApplicationResult, ApplicationRepositoryError> {
        let existing = ApplicationEntity::find_by_id(id)
            .filter(ApplicationColumn::UserId.eq(owner.as_uuid()))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(ApplicationRepositoryError::NotFound)?;

        let mut active: ApplicationActiveModel = existing.into();

        if let PatchField::Value(company) = data.company {
            active.company = Set(company);
        }
        if let PatchField::Value(position) = data.position {
            active.position = Set(position);
        }
        if let PatchField::Value(status) = data.status {
            active.status = Set(status);
        }
        match data.job_url {
            PatchField::Unset => {}
            PatchField::Null => active.job_url = Set(None),
            PatchField::Value(v) => active.job_url = Set(Some(v)),
        }
        match data.notes {
            PatchField::Unset => {}
            PatchField::Null => active.notes = Set(None),
            PatchField::Value(v) => active.notes = Set(Some(v)),
        }
        match data.applied_at {
            PatchField::Unset => {}
            PatchField::Null => active.applied_at = Set(None),
            PatchField::Value(v) => active.applied_at = Set(Some(v)),
        }
        active.updated_at = Set(chrono::Utc::now().fixed_offset());

        let updated = active.update(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), ApplicationRepositoryError> {
        #[derive(FromQueryResult)]
        struct IdResult {
            #[allow(dead_code)]
            id: Uuid,
        }

        // The snapshot FK cascades, so an attached snapshot disappears with
        // its application.
        let result = IdResult::find_by_statement(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"DELETE FROM job_applications WHERE id = $1 AND user_id = $2 RETURNING id"#,
            [id.into(), owner.as_uuid().into()],
        ))
        .one(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        if result.is_none() {
            return Err(ApplicationRepositoryError::NotFound);
        }

        Ok(())
    }
}
