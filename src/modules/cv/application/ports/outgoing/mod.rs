pub mod cv_query;
pub mod cv_repository;
pub mod inclusion_repository;

pub use cv_query::{ComposedCv, CvQuery, CvQueryError, Included};
pub use cv_repository::{CreateCvData, CvRepository, CvRepositoryError, CvResult, PatchCvData};
pub use inclusion_repository::{CvSection, InclusionRepository, InclusionRepositoryError};
