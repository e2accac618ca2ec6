pub mod education_repository;
pub mod project_repository;
pub mod skill_repository;
pub mod work_experience_repository;

pub use education_repository::*;
pub use project_repository::*;
pub use skill_repository::*;
pub use work_experience_repository::*;

//
// ──────────────────────────────────────────────────────────
// Shared error
// ──────────────────────────────────────────────────────────
//

/// One error shape for all four library kinds. `NotFound` covers both a
/// missing row and a row owned by someone else; adapters never tell the
/// two apart.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LibraryRepositoryError {
    #[error("Library item not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
