use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use creative_dna::quiz::{
    AnalyticsError, AnalyticsEvent, AnalyticsPublisher, RepositoryError, SessionId, SessionRecord,
    SessionRepository,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            guard.insert(record.session_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Capturing publisher standing in for the real beacon transport; the demo
/// prints a funnel summary from it.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAnalyticsPublisher {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl AnalyticsPublisher for InMemoryAnalyticsPublisher {
    fn publish(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        let mut guard = self.events.lock().expect("analytics mutex poisoned");
        guard.push(event);
        Ok(())
    }
}

impl InMemoryAnalyticsPublisher {
    pub(crate) fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().expect("analytics mutex poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use creative_dna::quiz::{QuizSession, QuizSessionStatus};

    fn record(id: &str) -> SessionRecord {
        SessionRecord {
            session_id: SessionId(id.to_string()),
            session: QuizSession::begin(Utc::now()),
            status: QuizSessionStatus::InProgress,
            result: None,
        }
    }

    #[test]
    fn insert_rejects_duplicate_sessions() {
        let repository = InMemorySessionRepository::default();
        repository.insert(record("cdna-000001")).expect("first insert");
        let result = repository.insert(record("cdna-000001"));
        assert!(matches!(result, Err(RepositoryError::Conflict)));
    }

    #[test]
    fn update_requires_an_existing_record() {
        let repository = InMemorySessionRepository::default();
        let result = repository.update(record("cdna-000002"));
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }
}
