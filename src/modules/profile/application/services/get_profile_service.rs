use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::UserProfile;
use crate::profile::application::ports::incoming::use_cases::{GetProfileError, GetProfileUseCase};
use crate::profile::application::ports::outgoing::ProfileQuery;

pub struct GetProfileService<Q>
where
    Q: ProfileQuery,
{
    profile_query: Q,
}

impl<Q> GetProfileService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(profile_query: Q) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q> GetProfileUseCase for GetProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<UserProfile, GetProfileError> {
        let profile = self
            .profile_query
            .fetch_profile(owner)
            .await
            .map_err(|e| GetProfileError::RepositoryError(e.to_string()))?;

        Ok(profile.unwrap_or_else(|| UserProfile::empty(owner)))
    }
}
