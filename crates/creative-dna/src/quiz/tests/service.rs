use std::sync::Arc;

use super::common::*;
use crate::quiz::repository::{AnalyticsEventName, RepositoryError};
use crate::quiz::scoring::ResolutionTier;
use crate::quiz::service::{QuizService, QuizServiceError};
use crate::quiz::{Category, ContactInfo, QuizSessionStatus, SessionId};

#[test]
fn start_opens_an_empty_session_and_emits_start_event() {
    let (service, analytics) = quiz_service();

    let record = service.start().expect("session starts");

    assert_eq!(record.status, QuizSessionStatus::InProgress);
    assert!(record.session.answers.is_empty());
    assert!(record.result.is_none());

    let events = analytics.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, AnalyticsEventName::StartTest);
    assert_eq!(events[0].session_id, record.session_id);
}

#[test]
fn full_maker_script_resolves_at_tier_one() {
    let (service, analytics) = quiz_service();
    let record = service.start().expect("session starts");

    for (question_id, option_id) in MAKER_SCRIPT {
        service
            .answer(&record.session_id, question_id, option_id)
            .expect("valid answer");
    }

    let outcome = service.complete(&record.session_id).expect("resolves");

    assert_eq!(outcome.resolution.category, Category::Maker);
    assert_eq!(outcome.resolution.tier, ResolutionTier::DirectMaximum);
    assert_eq!(outcome.profile.title, "The Assembler");

    let stored = service.get(&record.session_id).expect("record exists");
    assert_eq!(stored.status, QuizSessionStatus::Completed);
    assert!(stored.session.completed_at.is_some());
    assert_eq!(stored.result, Some(outcome.resolution));

    let result_events: Vec<_> = analytics
        .events()
        .into_iter()
        .filter(|event| event.name == AnalyticsEventName::ResultComputed)
        .collect();
    assert_eq!(result_events.len(), 1);
    assert_eq!(
        result_events[0].properties.get("category").map(String::as_str),
        Some("MAKER")
    );
}

#[test]
fn completing_twice_recomputes_the_same_result() {
    let (service, _analytics) = quiz_service();
    let record = service.start().expect("session starts");

    for (question_id, option_id) in MAKER_SCRIPT {
        service
            .answer(&record.session_id, question_id, option_id)
            .expect("valid answer");
    }

    let first = service.complete(&record.session_id).expect("resolves");
    let second = service.complete(&record.session_id).expect("resolves again");

    assert_eq!(first.resolution, second.resolution);
}

#[test]
fn completed_sessions_reject_further_answers() {
    let (service, _analytics) = quiz_service();
    let record = service.start().expect("session starts");
    service.complete(&record.session_id).expect("resolves");

    let result = service.answer(&record.session_id, 1, 1);
    assert!(matches!(result, Err(QuizServiceError::SessionCompleted)));
}

#[test]
fn contact_is_stored_and_emits_info_event() {
    let (service, analytics) = quiz_service();
    let record = service.start().expect("session starts");

    let contact = ContactInfo {
        name: "Jordan".to_string(),
        email: "jordan@example.com".to_string(),
        region: "DE".to_string(),
        email_subscription: true,
    };
    let updated = service
        .contact(&record.session_id, contact.clone())
        .expect("contact accepted");

    assert_eq!(updated.session.contact, Some(contact));
    assert!(analytics
        .events()
        .iter()
        .any(|event| event.name == AnalyticsEventName::InfoSubmitted
            && event.properties.get("region").map(String::as_str) == Some("DE")));
}

#[test]
fn unknown_session_is_reported_as_not_found() {
    let (service, _analytics) = quiz_service();

    let result = service.get(&SessionId("cdna-missing".to_string()));
    assert!(matches!(
        result,
        Err(QuizServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn invalid_option_is_rejected_without_mutating_the_session() {
    let (service, _analytics) = quiz_service();
    let record = service.start().expect("session starts");

    let result = service.answer(&record.session_id, 1, 9);
    assert!(matches!(result, Err(QuizServiceError::Answer(_))));

    let stored = service.get(&record.session_id).expect("record exists");
    assert!(stored.session.answers.is_empty());
}

#[test]
fn analytics_outage_never_fails_a_quiz_operation() {
    let repository = Arc::new(MemoryRepository::default());
    let service = QuizService::new(repository, Arc::new(FailingAnalytics));

    let record = service.start().expect("session starts despite outage");
    service
        .answer(&record.session_id, 1, 1)
        .expect("answer recorded despite outage");
    let outcome = service.complete(&record.session_id).expect("resolves");

    assert_eq!(outcome.resolution.category, Category::Tidy);
}
