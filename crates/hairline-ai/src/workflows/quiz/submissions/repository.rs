use super::domain::{SubmissionId, SubmissionRecord};

/// Storage abstraction so the service can be exercised in isolation and
/// so an unavailable backend stays a value, not a panic.
pub trait SubmissionRepository: Send + Sync {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError>;
    fn list(&self, limit: usize, offset: usize)
        -> Result<Vec<SubmissionRecord>, RepositoryError>;
    fn fetch(&self, id: SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
