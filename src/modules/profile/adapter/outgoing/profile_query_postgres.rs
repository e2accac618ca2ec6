use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::UserProfile;
use crate::profile::application::ports::outgoing::{ProfileQuery, ProfileQueryError};

use super::sea_orm_entity::Entity as ProfileEntity;

#[derive(Debug, Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn fetch_profile(&self, owner: UserId) -> Result<Option<UserProfile>, ProfileQueryError> {
        let model = ProfileEntity::find_by_id(owner.as_uuid())
            .one(&*self.db)
            .await
            .map_err(|e| ProfileQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    fn profile_model(user_id: Uuid) -> crate::profile::adapter::outgoing::sea_orm_entity::Model {
        let now = Utc::now().fixed_offset();
        crate::profile::adapter::outgoing::sea_orm_entity::Model {
            user_id,
            full_name: Some("Jane Doe".to_string()),
            headline: Some("Backend Engineer".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: None,
            location: Some("Berlin".to_string()),
            website: None,
            summary: Some("Ten years of Rust".to_string()),
            photo_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn fetch_profile_maps_row_to_domain() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![profile_model(user_id)]])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));
        let profile = query
            .fetch_profile(UserId::from(user_id))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(profile.owner.as_uuid(), user_id);
        assert_eq!(profile.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.summary.as_deref(), Some("Ten years of Rust"));
    }

    #[tokio::test]
    async fn fetch_profile_returns_none_for_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<
                crate::profile::adapter::outgoing::sea_orm_entity::Model,
            >::new()])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));
        let profile = query
            .fetch_profile(UserId::from(Uuid::new_v4()))
            .await
            .unwrap();

        assert!(profile.is_none());
    }
}
