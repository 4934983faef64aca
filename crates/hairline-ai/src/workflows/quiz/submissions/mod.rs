//! Submission intake and retrieval for the quiz funnel: the persistence
//! boundary around the two classification pipelines. Storage is a trait so
//! the service degrades gracefully when the backing store is unavailable;
//! the funnel must never lose a lead because the database blinked.

pub mod domain;
pub mod export;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    CreateSubmissionRequest, LeadContact, SubmissionId, SubmissionRecord, SubmissionView,
};
pub use repository::{RepositoryError, SubmissionRepository};
pub use router::submission_router;
pub use service::{
    PageSettings, QuizSubmissionService, SubmissionOutcome, SubmissionServiceError,
};
