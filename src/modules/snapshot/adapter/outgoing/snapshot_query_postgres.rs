use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::snapshot::application::ports::outgoing::{
    SnapshotHeaderView, SnapshotQuery, SnapshotQueryError, SnapshotResult,
};

use super::sea_orm_entity::{
    snapshot_education_entries, snapshot_headers, snapshot_project_entries, snapshot_skill_entries,
    snapshot_work_entries, snapshots,
};

#[derive(Debug, Clone)]
pub struct SnapshotQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SnapshotQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> SnapshotQueryError {
        SnapshotQueryError::DatabaseError(e.to_string())
    }

    /// Load the header and the four child collections for a snapshot row.
    /// Children come back ordered by stored sort value, ties by row id.
    async fn assemble(&self, snapshot: snapshots::Model) -> Result<SnapshotResult, SnapshotQueryError> {
        let header = snapshot_headers::Entity::find_by_id(snapshot.id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .map(|m| m.to_view())
            .unwrap_or(SnapshotHeaderView {
                full_name: None,
                headline: None,
                email: None,
                phone: None,
                location: None,
                website: None,
                summary: None,
                photo_url: None,
            });

        let work_experiences = snapshot_work_entries::Entity::find()
            .filter(snapshot_work_entries::Column::SnapshotId.eq(snapshot.id))
            .order_by_asc(snapshot_work_entries::Column::SortOrder)
            .order_by_asc(snapshot_work_entries::Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .iter()
            .map(|m| m.to_view())
            .collect();

        let educations = snapshot_education_entries::Entity::find()
            .filter(snapshot_education_entries::Column::SnapshotId.eq(snapshot.id))
            .order_by_asc(snapshot_education_entries::Column::SortOrder)
            .order_by_asc(snapshot_education_entries::Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .iter()
            .map(|m| m.to_view())
            .collect();

        let skills = snapshot_skill_entries::Entity::find()
            .filter(snapshot_skill_entries::Column::SnapshotId.eq(snapshot.id))
            .order_by_asc(snapshot_skill_entries::Column::SortOrder)
            .order_by_asc(snapshot_skill_entries::Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .iter()
            .map(|m| m.to_view())
            .collect();

        let projects = snapshot_project_entries::Entity::find()
            .filter(snapshot_project_entries::Column::SnapshotId.eq(snapshot.id))
            .order_by_asc(snapshot_project_entries::Column::SortOrder)
            .order_by_asc(snapshot_project_entries::Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .iter()
            .map(|m| m.to_view())
            .collect();

        Ok(SnapshotResult {
            id: snapshot.id,
            owner: UserId::from(snapshot.user_id),
            source_cv_id: snapshot.source_cv_id,
            application_id: snapshot.application_id,
            title: snapshot.title,
            template: snapshot.template,
            created_at: snapshot.created_at.into(),
            header,
            work_experiences,
            educations,
            skills,
            projects,
        })
    }
}

#[async_trait]
impl SnapshotQuery for SnapshotQueryPostgres {
    async fn fetch_snapshot(
        &self,
        owner: UserId,
        snapshot_id: Uuid,
    ) -> Result<SnapshotResult, SnapshotQueryError> {
        let snapshot = snapshots::Entity::find_by_id(snapshot_id)
            .filter(snapshots::Column::UserId.eq(owner.as_uuid()))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(SnapshotQueryError::NotFound)?;

        self.assemble(snapshot).await
    }

    async fn fetch_by_application(
        &self,
        owner: UserId,
        application_id: Uuid,
    ) -> Result<SnapshotResult, SnapshotQueryError> {
        let snapshot = snapshots::Entity::find()
            .filter(snapshots::Column::ApplicationId.eq(application_id))
            .filter(snapshots::Column::UserId.eq(owner.as_uuid()))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(SnapshotQueryError::NotFound)?;

        self.assemble(snapshot).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn snapshot_model(user_id: Uuid) -> snapshots::Model {
        snapshots::Model {
            id: Uuid::new_v4(),
            user_id,
            source_cv_id: Uuid::new_v4(),
            application_id: None,
            title: "Backend Resume".to_string(),
            template: "classic".to_string(),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn fetch_snapshot_hides_foreign_rows_as_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<snapshots::Model>::new()])
            .into_connection();

        let query = SnapshotQueryPostgres::new(Arc::new(db));
        let err = query
            .fetch_snapshot(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, SnapshotQueryError::NotFound));
    }

    #[tokio::test]
    async fn fetch_snapshot_assembles_children_in_order() {
        let user_id = Uuid::new_v4();
        let snapshot = snapshot_model(user_id);
        let snapshot_id = snapshot.id;

        let work = vec![
            snapshot_work_entries::Model {
                id: Uuid::new_v4(),
                snapshot_id,
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                location: None,
                start_date: chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                end_date: None,
                is_current: true,
                summary: None,
                sort_order: 0,
            },
            snapshot_work_entries::Model {
                id: Uuid::new_v4(),
                snapshot_id,
                company: "Globex".to_string(),
                role: "Lead".to_string(),
                location: None,
                start_date: chrono::NaiveDate::from_ymd_opt(2016, 1, 1).unwrap(),
                end_date: chrono::NaiveDate::from_ymd_opt(2019, 12, 31),
                is_current: false,
                summary: None,
                sort_order: 1,
            },
        ];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![snapshot]])
            .append_query_results([vec![snapshot_headers::Model {
                snapshot_id,
                full_name: Some("Jane Doe".to_string()),
                headline: None,
                email: None,
                phone: None,
                location: None,
                website: None,
                summary: None,
                photo_url: None,
            }]])
            .append_query_results([work])
            .append_query_results([Vec::<snapshot_education_entries::Model>::new()])
            .append_query_results([Vec::<snapshot_skill_entries::Model>::new()])
            .append_query_results([Vec::<snapshot_project_entries::Model>::new()])
            .into_connection();

        let query = SnapshotQueryPostgres::new(Arc::new(db));
        let result = query
            .fetch_snapshot(UserId::from(user_id), snapshot_id)
            .await
            .unwrap();

        assert_eq!(result.header.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(result.work_experiences.len(), 2);
        assert_eq!(result.work_experiences[0].company, "Acme");
        assert_eq!(result.work_experiences[1].company, "Globex");
    }
}
