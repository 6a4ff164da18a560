use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::QuestionBank;
use super::domain::{AnswerSet, CategoryScores, ContactInfo};
use super::scoring::{self, Resolution};

/// Quiz progress for one session, updated by value: each answer produces a new
/// state, so there is no shared mutable accumulator to drift out of sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    pub answers: AnswerSet,
    pub contact: Option<ContactInfo>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    pub fn begin(started_at: DateTime<Utc>) -> Self {
        Self {
            answers: AnswerSet::new(),
            contact: None,
            started_at,
            completed_at: None,
        }
    }

    /// Record (or change) the answer for a question after validating both ids
    /// against the bank. Re-answering replaces the prior choice.
    pub fn with_answer(
        mut self,
        bank: &QuestionBank,
        question_id: u8,
        option_id: u8,
    ) -> Result<Self, AnswerError> {
        let question = bank
            .question(question_id)
            .ok_or(AnswerError::UnknownQuestion { question_id })?;
        if question.option(option_id).is_none() {
            return Err(AnswerError::UnknownOption {
                question_id,
                option_id,
            });
        }

        self.answers.record(question_id, option_id);
        Ok(self)
    }

    pub fn with_contact(mut self, contact: ContactInfo) -> Self {
        self.contact = Some(contact);
        self
    }

    /// Accumulated category totals, recomputed from the full answer set on
    /// every read. Changing an answer therefore fully removes the earlier
    /// option's points instead of stacking on top of them.
    pub fn scores(&self, bank: &QuestionBank) -> CategoryScores {
        let mut totals = CategoryScores::default();
        for (question_id, option_id) in self.answers.iter() {
            let Some(option) = bank
                .question(question_id)
                .and_then(|question| question.option(option_id))
            else {
                continue;
            };
            for (category, points) in &option.scores {
                totals.add(*category, *points);
            }
        }
        totals
    }

    /// Resolve the current state to a single category. Total for any answer
    /// set, including a partial or empty one.
    pub fn resolve(&self, bank: &QuestionBank) -> Resolution {
        scoring::resolve(&self.scores(bank), &self.answers)
    }
}

/// Rejected answer submissions. These indicate a broken caller rather than a
/// user-facing condition; the UI only ever submits ids it was handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("question {question_id} is not part of the quiz")]
    UnknownQuestion { question_id: u8 },
    #[error("option {option_id} is not offered by question {question_id}")]
    UnknownOption { question_id: u8, option_id: u8 },
}
