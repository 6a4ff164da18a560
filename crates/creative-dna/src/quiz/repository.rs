use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{QuizSessionStatus, SessionId};
use super::scoring::Resolution;
use super::session::QuizSession;

/// Repository record pairing the session state with lifecycle metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub session: QuizSession,
    pub status: QuizSessionStatus,
    pub result: Option<Resolution>,
}

impl SessionRecord {
    pub fn status_view(&self) -> SessionStatusView {
        SessionStatusView {
            session_id: self.session_id.clone(),
            status: self.status.label(),
            answered: self.session.answers.len(),
            result: self
                .result
                .map(|resolution| resolution.category.label()),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
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

/// Outbound analytics hook. Events mirror the funnel taxonomy of the original
/// experience; delivery is best-effort and never blocks a quiz operation.
pub trait AnalyticsPublisher: Send + Sync {
    fn publish(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError>;
}

/// One funnel event with per-event properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: AnalyticsEventName,
    pub session_id: SessionId,
    pub recorded_at: DateTime<Utc>,
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsEventName {
    StartTest,
    QuestionAnswered,
    InfoSubmitted,
    ResultComputed,
}

impl AnalyticsEventName {
    pub const fn label(self) -> &'static str {
        match self {
            AnalyticsEventName::StartTest => "start_test",
            AnalyticsEventName::QuestionAnswered => "question_answered",
            AnalyticsEventName::InfoSubmitted => "info_submitted",
            AnalyticsEventName::ResultComputed => "result_computed",
        }
    }
}

/// Analytics dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("analytics transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a session's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusView {
    pub session_id: SessionId,
    pub status: &'static str,
    pub answered: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'static str>,
}
