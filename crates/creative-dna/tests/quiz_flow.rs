//! End-to-end specifications for the Creative DNA quiz delivered through the
//! public service facade, mirroring how the UI shell drives a session from
//! start to the rendered result card.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use creative_dna::quiz::{
        AnalyticsError, AnalyticsEvent, AnalyticsPublisher, QuizService, RepositoryError,
        SessionId, SessionRecord, SessionRepository,
    };

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
    pub(super) struct MemoryAnalytics {
        events: Arc<Mutex<Vec<AnalyticsEvent>>>,
    }

    impl AnalyticsPublisher for MemoryAnalytics {
        fn publish(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
            let mut guard = self.events.lock().expect("analytics mutex poisoned");
            guard.push(event);
            Ok(())
        }
    }

    impl MemoryAnalytics {
        pub(super) fn events(&self) -> Vec<AnalyticsEvent> {
            self.events.lock().expect("analytics mutex poisoned").clone()
        }
    }

    pub(super) fn quiz_service() -> (
        Arc<QuizService<MemoryRepository, MemoryAnalytics>>,
        MemoryAnalytics,
    ) {
        let repository = Arc::new(MemoryRepository::default());
        let analytics = MemoryAnalytics::default();
        let service = Arc::new(QuizService::new(repository, Arc::new(analytics.clone())));
        (service, analytics)
    }
}

use common::quiz_service;
use creative_dna::quiz::{
    resolve, AnalyticsEventName, AnswerSet, Category, CategoryScores, ContactInfo,
    QuizSessionStatus, ResolutionTier,
};

#[test]
fn maker_leaning_run_produces_the_assembler_card() {
    let (service, analytics) = quiz_service();
    let record = service.start().expect("session starts");

    let script = [
        (1, 2),
        (2, 1),
        (3, 3),
        (4, 1),
        (5, 1),
        (6, 2),
        (7, 1),
        (8, 1),
    ];
    for (question_id, option_id) in script {
        service
            .answer(&record.session_id, question_id, option_id)
            .expect("valid answer");
    }

    service
        .contact(
            &record.session_id,
            ContactInfo {
                name: "Alex".to_string(),
                email: "alex@example.com".to_string(),
                region: "FR".to_string(),
                email_subscription: false,
            },
        )
        .expect("contact accepted");

    let outcome = service.complete(&record.session_id).expect("resolves");

    assert_eq!(outcome.resolution.category, Category::Maker);
    assert_eq!(outcome.resolution.tier, ResolutionTier::DirectMaximum);
    assert_eq!(outcome.profile.title, "The Assembler");
    assert!(outcome.scores.get(Category::Maker) > outcome.scores.get(Category::Reform));

    let stored = service.get(&record.session_id).expect("record exists");
    assert_eq!(stored.status, QuizSessionStatus::Completed);

    let names: Vec<AnalyticsEventName> = analytics.events().iter().map(|event| event.name).collect();
    assert!(names.contains(&AnalyticsEventName::StartTest));
    assert!(names.contains(&AnalyticsEventName::InfoSubmitted));
    assert!(names.contains(&AnalyticsEventName::ResultComputed));
    assert_eq!(
        names
            .iter()
            .filter(|name| **name == AnalyticsEventName::QuestionAnswered)
            .count(),
        8
    );
}

#[test]
fn changing_an_answer_mid_quiz_never_double_counts() {
    let (service, _analytics) = quiz_service();
    let record = service.start().expect("session starts");

    // First instinct says TIDY, then the user swipes back and picks NOMAD.
    service
        .answer(&record.session_id, 1, 1)
        .expect("valid answer");
    service
        .answer(&record.session_id, 1, 3)
        .expect("valid re-answer");

    let (control, _) = quiz_service();
    let control_record = control.start().expect("session starts");
    control
        .answer(&control_record.session_id, 1, 3)
        .expect("valid answer");

    let changed = service.complete(&record.session_id).expect("resolves");
    let direct = control.complete(&control_record.session_id).expect("resolves");

    assert_eq!(changed.scores, direct.scores);
    assert_eq!(changed.resolution.category, direct.resolution.category);
}

#[test]
fn two_way_tie_without_heuristic_answers_falls_to_priority_order() {
    let mut scores = CategoryScores::default();
    scores.add(Category::Tidy, 4.0);
    scores.add(Category::Nomad, 4.0);

    let resolution = resolve(&scores, &AnswerSet::new());

    assert_eq!(resolution.category, Category::Nomad);
    assert_eq!(resolution.tier, ResolutionTier::PriorityFallback);
}

#[test]
fn every_full_answer_combination_resolves_to_exactly_one_category() {
    // 3^8 exhaustive sweep over the full bank: resolution is total and
    // deterministic for every reachable answer set.
    let (service, _analytics) = quiz_service();

    for combination in 0..3u32.pow(8) {
        let record = service.start().expect("session starts");
        let mut remaining = combination;
        for question_id in 1..=8u8 {
            let option_id = (remaining % 3) as u8 + 1;
            remaining /= 3;
            service
                .answer(&record.session_id, question_id, option_id)
                .expect("valid answer");
        }

        let first = service.complete(&record.session_id).expect("resolves");
        let second = service.complete(&record.session_id).expect("recomputes");
        assert_eq!(first.resolution, second.resolution);
        assert!(Category::ALL.contains(&first.resolution.category));
    }
}
