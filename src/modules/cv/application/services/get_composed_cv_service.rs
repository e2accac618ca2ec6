use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cv::application::ports::incoming::use_cases::{GetComposedCvError, GetComposedCvUseCase};
use crate::cv::application::ports::outgoing::{ComposedCv, CvQuery, CvQueryError};

pub struct GetComposedCvService<Q>
where
    Q: CvQuery,
{
    cv_query: Q,
}

impl<Q> GetComposedCvService<Q>
where
    Q: CvQuery,
{
    pub fn new(cv_query: Q) -> Self {
        Self { cv_query }
    }
}

#[async_trait]
impl<Q> GetComposedCvUseCase for GetComposedCvService<Q>
where
    Q: CvQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId, cv_id: Uuid) -> Result<ComposedCv, GetComposedCvError> {
        self.cv_query
            .fetch_composed(owner, cv_id)
            .await
            .map_err(|e| match e {
                CvQueryError::NotFound => GetComposedCvError::NotFound,
                CvQueryError::DatabaseError(msg) => GetComposedCvError::RepositoryError(msg),
            })
    }
}
