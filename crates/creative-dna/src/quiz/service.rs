use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use super::catalog::{CreativeProfile, QuestionBank};
use super::domain::{Category, CategoryScores, ContactInfo, QuizSessionStatus, SessionId};
use super::repository::{
    AnalyticsEvent, AnalyticsEventName, AnalyticsPublisher, RepositoryError, SessionRecord,
    SessionRepository,
};
use super::scoring::{self, Resolution, ResolutionTier};
use super::session::{AnswerError, QuizSession};

/// Service composing the question bank, session repository, resolution
/// engine, and analytics hook.
pub struct QuizService<R, A> {
    bank: Arc<QuestionBank>,
    repository: Arc<R>,
    analytics: Arc<A>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("cdna-{id:06}"))
}

impl<R, A> QuizService<R, A>
where
    R: SessionRepository + 'static,
    A: AnalyticsPublisher + 'static,
{
    pub fn new(repository: Arc<R>, analytics: Arc<A>) -> Self {
        Self::with_bank(Arc::new(QuestionBank::standard()), repository, analytics)
    }

    pub fn with_bank(bank: Arc<QuestionBank>, repository: Arc<R>, analytics: Arc<A>) -> Self {
        Self {
            bank,
            repository,
            analytics,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Open a fresh session with an empty answer set.
    pub fn start(&self) -> Result<SessionRecord, QuizServiceError> {
        let record = SessionRecord {
            session_id: next_session_id(),
            session: QuizSession::begin(Utc::now()),
            status: QuizSessionStatus::InProgress,
            result: None,
        };

        let stored = self.repository.insert(record)?;
        self.emit(AnalyticsEventName::StartTest, &stored.session_id, BTreeMap::new());
        Ok(stored)
    }

    /// Record or change one answer. Validation failures indicate a broken
    /// caller, not user input; the UI only submits ids handed out by
    /// `questions()`.
    pub fn answer(
        &self,
        session_id: &SessionId,
        question_id: u8,
        option_id: u8,
    ) -> Result<SessionRecord, QuizServiceError> {
        let mut record = self.fetch_record(session_id)?;
        if record.status == QuizSessionStatus::Completed {
            return Err(QuizServiceError::SessionCompleted);
        }

        record.session = record.session.with_answer(&self.bank, question_id, option_id)?;
        self.repository.update(record.clone())?;

        let mut properties = BTreeMap::new();
        properties.insert("question_id".to_string(), question_id.to_string());
        properties.insert("option_id".to_string(), option_id.to_string());
        self.emit(AnalyticsEventName::QuestionAnswered, session_id, properties);

        Ok(record)
    }

    /// Capture contact details collected on the info page.
    pub fn contact(
        &self,
        session_id: &SessionId,
        contact: ContactInfo,
    ) -> Result<SessionRecord, QuizServiceError> {
        let mut record = self.fetch_record(session_id)?;
        let mut properties = BTreeMap::new();
        properties.insert("region".to_string(), contact.region.clone());
        properties.insert(
            "email_subscription".to_string(),
            contact.email_subscription.to_string(),
        );

        record.session = record.session.with_contact(contact);
        self.repository.update(record.clone())?;
        self.emit(AnalyticsEventName::InfoSubmitted, session_id, properties);

        Ok(record)
    }

    /// Resolve the session to its winning category and persist the outcome.
    /// Re-running on a completed session recomputes the same result.
    pub fn complete(&self, session_id: &SessionId) -> Result<QuizOutcome, QuizServiceError> {
        let mut record = self.fetch_record(session_id)?;

        let scores = record.session.scores(&self.bank);
        let resolution = scoring::resolve(&scores, &record.session.answers);

        record.status = QuizSessionStatus::Completed;
        record.session.completed_at = Some(Utc::now());
        record.result = Some(resolution);
        self.repository.update(record.clone())?;

        let mut properties = BTreeMap::new();
        properties.insert(
            "category".to_string(),
            resolution.category.label().to_string(),
        );
        properties.insert("answered".to_string(), record.session.answers.len().to_string());
        self.emit(AnalyticsEventName::ResultComputed, session_id, properties);

        Ok(QuizOutcome {
            session_id: record.session_id,
            resolution,
            scores,
            profile: resolution.category.profile(),
        })
    }

    /// Fetch a session and current status for API responses.
    pub fn get(&self, session_id: &SessionId) -> Result<SessionRecord, QuizServiceError> {
        self.fetch_record(session_id)
    }

    fn fetch_record(&self, session_id: &SessionId) -> Result<SessionRecord, QuizServiceError> {
        let record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    fn emit(
        &self,
        name: AnalyticsEventName,
        session_id: &SessionId,
        properties: BTreeMap<String, String>,
    ) {
        let event = AnalyticsEvent {
            name,
            session_id: session_id.clone(),
            recorded_at: Utc::now(),
            properties,
        };

        if let Err(error) = self.analytics.publish(event) {
            warn!(event = name.label(), %error, "analytics event dropped");
        }
    }
}

/// Completed-quiz outcome handed back to the caller.
#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub session_id: SessionId,
    pub resolution: Resolution,
    pub scores: CategoryScores,
    pub profile: &'static CreativeProfile,
}

impl QuizOutcome {
    pub fn view(&self) -> QuizOutcomeView {
        QuizOutcomeView {
            session_id: self.session_id.clone(),
            category: self.resolution.category.label(),
            tier: self.resolution.tier,
            scores: self.scores.to_map(),
            profile: self.profile,
        }
    }
}

/// Serializable result card payload.
#[derive(Debug, Clone, Serialize)]
pub struct QuizOutcomeView {
    pub session_id: SessionId,
    pub category: &'static str,
    pub tier: ResolutionTier,
    pub scores: BTreeMap<Category, f32>,
    pub profile: &'static CreativeProfile,
}

/// Error raised by the quiz service.
#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error("session already completed")]
    SessionCompleted,
}
