use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::UserProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Read-only view of the externally-maintained profile. A user without a
/// profile row gets an empty profile, not an error.
#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<UserProfile, GetProfileError>;
}
