use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};

use super::domain::{CreateSubmissionRequest, SubmissionId, SubmissionRecord};
use super::repository::{RepositoryError, SubmissionRepository};
use crate::workflows::quiz::answers::AnswerSheet;
use crate::workflows::quiz::assessment::assess;
use crate::workflows::quiz::strategy::selections_from_answers;
use crate::workflows::quiz::styling::generate_recommendations;

/// Pagination limits applied to the listing endpoint.
#[derive(Debug, Clone, Copy)]
pub struct PageSettings {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    SubmissionId(SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// Service composing the classification pipelines with the repository.
pub struct QuizSubmissionService<R> {
    repository: Arc<R>,
    pages: PageSettings,
}

/// What happened to a submission. Persistence failure is an outcome, not
/// an error: the computed recommendation still reaches the caller.
#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    Persisted(SubmissionRecord),
    AcceptedWithoutPersistence { recommendation: serde_json::Value },
}

impl<R> QuizSubmissionService<R>
where
    R: SubmissionRepository + 'static,
{
    pub fn new(repository: Arc<R>, pages: PageSettings) -> Self {
        Self { repository, pages }
    }

    /// Accept a submission: compute the recommendation payload, then try
    /// to persist. Storage failure degrades to the accepted-without-
    /// persistence outcome so the funnel flow never blocks on the store.
    pub fn submit(&self, request: CreateSubmissionRequest) -> SubmissionOutcome {
        let recommendation = request
            .recommendation
            .clone()
            .unwrap_or_else(|| engine_recommendation(&request));

        let now = Utc::now();
        let record = SubmissionRecord {
            id: next_submission_id(),
            answers: request.answers,
            recommendation: recommendation.clone(),
            contact: request.contact,
            created_at: now,
            updated_at: now,
        };

        match self.repository.insert(record) {
            Ok(stored) => {
                info!(id = stored.id.0, "quiz submission persisted");
                SubmissionOutcome::Persisted(stored)
            }
            Err(error) => {
                warn!(%error, "quiz submission accepted without persistence");
                SubmissionOutcome::AcceptedWithoutPersistence { recommendation }
            }
        }
    }

    /// Page of submissions for the admin listing, limits clamped to the
    /// configured bounds.
    pub fn list(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<(Vec<SubmissionRecord>, usize, usize), SubmissionServiceError> {
        let limit = limit
            .unwrap_or(self.pages.default_page_size)
            .min(self.pages.max_page_size);
        let offset = offset.unwrap_or(0);
        let items = self.repository.list(limit, offset)?;
        Ok((items, limit, offset))
    }

    pub fn get(&self, id: SubmissionId) -> Result<SubmissionRecord, SubmissionServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Server-side recommendation payload: the diagnostic assessment plus the
/// styling-risk summary, in the shape the results page reads back.
fn engine_recommendation(request: &CreateSubmissionRequest) -> serde_json::Value {
    let answers = AnswerSheet::from_responses(&request.answers);
    let assessment = assess(&answers);
    let styling = generate_recommendations(&selections_from_answers(&answers));

    json!({
        "text": assessment.summary(),
        "diagnosis": assessment.diagnosis.view(),
        "severity": assessment.severity,
        "plan": assessment.plan,
        "styling": styling,
    })
}

/// Error raised by the submission service for read paths.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
