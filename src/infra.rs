use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use hairline_ai::config::FunnelConfig;
use hairline_ai::workflows::quiz::submissions::{
    PageSettings, RepositoryError, SubmissionId, SubmissionRecord, SubmissionRepository,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store backing the quiz-results endpoints. Swapping in a
/// database means implementing `SubmissionRepository` elsewhere; nothing
/// in the funnel assumes this map.
#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionRepository {
    records: Arc<Mutex<BTreeMap<SubmissionId, SubmissionRecord>>>,
}

impl SubmissionRepository for InMemorySubmissionRepository {
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

pub(crate) fn page_settings(config: &FunnelConfig) -> PageSettings {
    PageSettings {
        default_page_size: config.default_page_size,
        max_page_size: config.max_page_size,
    }
}
