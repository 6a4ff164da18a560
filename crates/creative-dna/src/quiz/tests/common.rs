use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::quiz::repository::{
    AnalyticsError, AnalyticsEvent, AnalyticsPublisher, RepositoryError, SessionRecord,
    SessionRepository,
};
use crate::quiz::service::QuizService;
use crate::quiz::SessionId;

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for MemoryRepository {
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

#[derive(Default, Clone)]
pub(super) struct RecordingAnalytics {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl AnalyticsPublisher for RecordingAnalytics {
    fn publish(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        let mut guard = self.events.lock().expect("analytics mutex poisoned");
        guard.push(event);
        Ok(())
    }
}

impl RecordingAnalytics {
    pub(super) fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().expect("analytics mutex poisoned").clone()
    }
}

/// Publisher that always fails, for asserting best-effort delivery.
pub(super) struct FailingAnalytics;

impl AnalyticsPublisher for FailingAnalytics {
    fn publish(&self, _event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        Err(AnalyticsError::Transport("beacon offline".to_string()))
    }
}

pub(super) fn quiz_service() -> (
    Arc<QuizService<MemoryRepository, RecordingAnalytics>>,
    RecordingAnalytics,
) {
    let repository = Arc::new(MemoryRepository::default());
    let analytics = RecordingAnalytics::default();
    let service = Arc::new(QuizService::new(repository, Arc::new(analytics.clone())));
    (service, analytics)
}

/// An answer script whose totals give MAKER a clear tier-1 maximum.
pub(super) const MAKER_SCRIPT: [(u8, u8); 8] = [
    (1, 2),
    (2, 1),
    (3, 3),
    (4, 1),
    (5, 1),
    (6, 2),
    (7, 1),
    (8, 1),
];

pub(super) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}
