use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, Set, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::outgoing::{
    CreateSkillData, LibraryRepositoryError, PatchSkillData, SkillRepository, SkillResult,
};
use crate::shared::patch::PatchField;

use super::sea_orm_entity::skills::{
    ActiveModel as SkillActiveModel, Column as SkillColumn, Entity as SkillEntity,
};

#[derive(Debug, Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: sea_orm::DbErr) -> LibraryRepositoryError {
        LibraryRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn create(&self, data: CreateSkillData) -> Result<SkillResult, LibraryRepositoryError> {
        let now = chrono::Utc::now().fixed_offset();

        let active = SkillActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            name: Set(data.name),
            proficiency: Set(data.proficiency),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<SkillResult>, LibraryRepositoryError> {
        let models = SkillEntity::find()
            .filter(SkillColumn::UserId.eq(owner.as_uuid()))
            .order_by_desc(SkillColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchSkillData,
    ) -> Result<SkillResult, LibraryRepositoryError> {
        let existing = SkillEntity::find_by_id(id)
            .filter(SkillColumn::UserId.eq(owner.as_uuid()))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(LibraryRepositoryError::NotFound)?;

        let mut active: SkillActiveModel = existing.into();

        if let PatchField::Value(name) = data.name {
            active.name = Set(name);
        }
        match data.proficiency {
            PatchField::Unset => {}
            PatchField::Null => active.proficiency = Set(None),
            PatchField::Value(v) => active.proficiency = Set(Some(v)),
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
            r#"DELETE FROM library_skills WHERE id = $1 AND user_id = $2 RETURNING id"#,
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
