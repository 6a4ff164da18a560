//! Creative DNA quiz: question bank, session state, the scoring and
//! tie-break resolution engine, and the service/router surface around them.

pub mod catalog;
pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
mod session;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{CreativeProfile, QuestionBank};
pub use domain::{
    AnswerSet, Category, CategoryScores, ContactInfo, Question, QuestionOption, QuizSessionStatus,
    SessionId,
};
pub use repository::{
    AnalyticsError, AnalyticsEvent, AnalyticsEventName, AnalyticsPublisher, RepositoryError,
    SessionRecord, SessionRepository, SessionStatusView,
};
pub use router::quiz_router;
pub use scoring::{resolve, Resolution, ResolutionTier, PRIORITY_ORDER};
pub use session::{AnswerError, QuizSession};
pub use service::{QuizOutcome, QuizOutcomeView, QuizService, QuizServiceError};
