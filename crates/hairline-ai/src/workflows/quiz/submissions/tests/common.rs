use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::quiz::answers::{question, AnswerValue, QuestionnaireAnswer};
use crate::workflows::quiz::submissions::domain::{
    CreateSubmissionRequest, LeadContact, SubmissionId, SubmissionRecord,
};
use crate::workflows::quiz::submissions::repository::{RepositoryError, SubmissionRepository};
use crate::workflows::quiz::submissions::router::submission_router;
use crate::workflows::quiz::submissions::service::{PageSettings, QuizSubmissionService};

pub(super) fn traction_answers() -> Vec<QuestionnaireAnswer> {
    vec![
        QuestionnaireAnswer {
            question_id: question::AFFECTED_AREAS.to_string(),
            answer: AnswerValue::Multi(vec![
                "Edges (front hairline)".to_string(),
                "Temples (sides of hairline)".to_string(),
            ]),
        },
        QuestionnaireAnswer {
            question_id: question::PROTECTIVE_STYLES.to_string(),
            answer: AnswerValue::Multi(vec!["Box braids (individual plaits)".to_string()]),
        },
        QuestionnaireAnswer {
            question_id: question::PRIMARY_GOAL.to_string(),
            answer: AnswerValue::Single("Regrow my edges and hairline".to_string()),
        },
    ]
}

pub(super) fn submission_request() -> CreateSubmissionRequest {
    CreateSubmissionRequest {
        answers: traction_answers(),
        recommendation: None,
        contact: LeadContact {
            name: Some("Ada O.".to_string()),
            email: Some("ada@example.com".to_string()),
            phone: Some("08012345678".to_string()),
            state: Some("Lagos".to_string()),
        },
    }
}

pub(super) fn build_service() -> (
    QuizSubmissionService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = QuizSubmissionService::new(repository.clone(), PageSettings::default());
    (service, repository)
}

pub(super) fn router_with_service(
    service: QuizSubmissionService<MemoryRepository>,
) -> axum::Router {
    submission_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<BTreeMap<SubmissionId, SubmissionRecord>>>,
}

impl SubmissionRepository for MemoryRepository {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id, record.clone());
        Ok(record)
    }

    fn list(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().skip(offset).take(limit).cloned().collect())
    }

    fn fetch(&self, id: SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(&id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl SubmissionRepository for UnavailableRepository {
    fn insert(&self, _record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(
        &self,
        _limit: usize,
        _offset: usize,
    ) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
