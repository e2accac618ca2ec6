use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, Set, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::outgoing::{
    CreateEducationData, EducationRepository, EducationResult, LibraryRepositoryError,
    PatchEducationData,
};
use crate::shared::patch::PatchField;

use super::sea_orm_entity::educations::{
    ActiveModel as EducationActiveModel, Column as EducationColumn, Entity as EducationEntity,
};

#[derive(Debug, Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: sea_orm::DbErr) -> LibraryRepositoryError {
        LibraryRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl EducationRepository for EducationRepositoryPostgres {
    async fn create(
        &self,
        data: CreateEducationData,
    ) -> Result<EducationResult, LibraryRepositoryError> {
        let now = chrono::Utc::now().fixed_offset();

        let active = EducationActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            institution: Set(data.institution),
            degree: Set(data.degree),
            field_of_study: Set(data.field_of_study),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            description: Set(data.description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<EducationResult>, LibraryRepositoryError> {
        let models = EducationEntity::find()
            .filter(EducationColumn::UserId.eq(owner.as_uuid()))
            .order_by_desc(EducationColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchEducationData,
    ) -> Result<EducationResult, LibraryRepositoryError> {
        let existing = EducationEntity::find_by_id(id)
            .filter(EducationColumn::UserId.eq(owner.as_uuid()))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(LibraryRepositoryError::NotFound)?;

        let mut active: EducationActiveModel = existing.into();

        if let PatchField::Value(institution) = data.institution {
            active.institution = Set(institution);
        }
        if let PatchField::Value(degree) = data.degree {
            active.degree = Set(degree);
        }
        match data.field_of_study {
            PatchField::Unset => {}
            PatchField::Null => active.field_of_study = Set(None),
            PatchField::Value(v) => active.field_of_study = Set(Some(v)),
        }
        match data.start_date {
            PatchField::Unset => {}
            PatchField::Null => active.start_date = Set(None),
            PatchField::Value(v) => active.start_date = Set(Some(v)),
        }
        match data.end_date {
            PatchField::Unset => {}
            PatchField::Null => active.end_date = Set(None),
            PatchField::Value(v) => active.end_date = Set(Some(v)),
        }
        match data.description {
            PatchField::Unset => {}
            PatchField::Null => active.description = Set(None),
            PatchField::Value(v) => active.description = Set(Some(v)),
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

        let result = IdResult::find_by_statement(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"DELETE FROM library_educations WHERE id = $1 AND user_id = $2 RETURNING id"#,
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
