use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, Set, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::library::application::ports::outgoing::{
    CreateProjectData, LibraryRepositoryError, PatchProjectData, ProjectRepository, ProjectResult,
};
use crate::shared::patch::PatchField;

use super::sea_orm_entity::projects::{
    ActiveModel as ProjectActiveModel, Column as ProjectColumn, Entity as ProjectEntity,
};

#[derive(Debug, Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: sea_orm::DbErr) -> LibraryRepositoryError {
        LibraryRepositoryError::DatabaseError(e.to_string())
    }

    fn tags_to_json(tags: &[String]) -> Result<serde_json::Value, LibraryRepositoryError> {
        serde_json::to_value(tags)
            .map_err(|e| LibraryRepositoryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectResult, LibraryRepositoryError> {
        let now = chrono::Utc::now().fixed_offset();

        let active = ProjectActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            name: Set(data.name),
            description: Set(data.description),
            url: Set(data.url),
            tech_stack: Set(Self::tags_to_json(&data.tech_stack)?),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<ProjectResult>, LibraryRepositoryError> {
        let models = ProjectEntity::find()
            .filter(ProjectColumn::UserId.eq(owner.as_uuid()))
            .order_by_desc(ProjectColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectResult, LibraryRepositoryError> {
        let existing = ProjectEntity::find_by_id(id)
            .filter(ProjectColumn::UserId.eq(owner.as_uuid()))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(LibraryRepositoryError::NotFound)?;

        let mut active: ProjectActiveModel = existing.into();

        if let PatchField::Value(name) = data.name {
            active.name = Set(name);
        }
        match data.description {
            PatchField::Unset => {}
            PatchField::Null => active.description = Set(None),
            PatchField::Value(v) => active.description = Set(Some(v)),
        }
        match data.url {
            PatchField::Unset => {}
            PatchField::Null => active.url = Set(None),
            PatchField::Value(v) => active.url = Set(Some(v)),
        }
        match data.tech_stack {
            PatchField::Unset => {}
            // Clearing the tag list means an empty array, not NULL.
            PatchField::Null => active.tech_stack = Set(serde_json::json!([])),
            PatchField::Value(tags) => active.tech_stack = Set(Self::tags_to_json(&tags)?),
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
            r#"DELETE FROM library_projects WHERE id = $1 AND user_id = $2 RETURNING id"#,
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
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::library::adapter::outgoing::sea_orm_entity::projects::Model as ProjectModel;

    fn project_model(user_id: Uuid) -> ProjectModel {
        let now = Utc::now().fixed_offset();
        ProjectModel {
            id: Uuid::new_v4(),
            user_id,
            name: "CVStack".to_string(),
            description: None,
            url: None,
            tech_stack: serde_json::json!(["rust", "actix-web"]),
            start_date: None,
            end_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_for_owner_decodes_tech_stack_tags_in_order() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![project_model(user_id)]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let items = repo.list_for_owner(UserId::from(user_id)).await.unwrap();

        assert_eq!(items[0].tech_stack, vec!["rust", "actix-web"]);
    }
}
