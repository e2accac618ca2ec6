use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::UserProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-only view onto the external profile store. Returns `None` when the
/// user has no profile row yet.
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn fetch_profile(&self, owner: UserId) -> Result<Option<UserProfile>, ProfileQueryError>;
}
