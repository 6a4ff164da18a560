use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The six creative personality categories. Closed set, never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Maker,
    Tidy,
    Illuma,
    Reform,
    Nomad,
    Visual,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Maker,
        Self::Tidy,
        Self::Illuma,
        Self::Reform,
        Self::Nomad,
        Self::Visual,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Maker => "MAKER",
            Category::Tidy => "TIDY",
            Category::Illuma => "ILLUMA",
            Category::Reform => "REFORM",
            Category::Nomad => "NOMAD",
            Category::Visual => "VISUAL",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Category::Maker => 0,
            Category::Tidy => 1,
            Category::Illuma => 2,
            Category::Reform => 3,
            Category::Nomad => 4,
            Category::Visual => 5,
        }
    }
}

/// Running point totals with every category always present.
///
/// Totals start at zero and only grow while answers accumulate; the tie-break
/// layer works on a copy, so the base accumulator never sees fractional
/// adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryScores {
    totals: [f32; 6],
}

impl CategoryScores {
    /// Tolerance when grouping tied leaders, so fractional bonuses that are
    /// equal by intent compare as equal regardless of summation order.
    pub const TIE_EPSILON: f32 = 1e-6;

    pub fn get(&self, category: Category) -> f32 {
        self.totals[category.slot()]
    }

    pub fn add(&mut self, category: Category, points: f32) {
        self.totals[category.slot()] += points;
    }

    pub fn max(&self) -> f32 {
        self.totals.iter().copied().fold(f32::MIN, f32::max)
    }

    /// Categories whose total sits at the current maximum.
    ///
    /// Never empty: at least the maximum itself qualifies.
    pub fn leaders(&self) -> Vec<Category> {
        let max = self.max();
        Category::ALL
            .into_iter()
            .filter(|category| (max - self.get(*category)).abs() <= Self::TIE_EPSILON)
            .collect()
    }

    pub fn to_map(&self) -> BTreeMap<Category, f32> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
            .collect()
    }
}

/// One quiz question with its 2-3 answer options in presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: u8,
    pub text: &'static str,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option(&self, option_id: u8) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

/// An answer option carrying a partial score vector; categories absent from
/// the vector contribute nothing. Mixed options award more than one category.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionOption {
    pub id: u8,
    pub text: &'static str,
    pub scores: Vec<(Category, f32)>,
}

impl QuestionOption {
    /// Zero-based index used by the tie-break heuristics.
    pub const fn choice_index(&self) -> usize {
        (self.id - 1) as usize
    }
}

/// Question id -> chosen option id. Re-answering a question replaces the
/// earlier entry; it never accumulates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    chosen: BTreeMap<u8, u8>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question_id: u8, option_id: u8) {
        self.chosen.insert(question_id, option_id);
    }

    pub fn chosen_option(&self, question_id: u8) -> Option<u8> {
        self.chosen.get(&question_id).copied()
    }

    /// Zero-based choice index for a question, if answered.
    pub fn choice_index(&self, question_id: u8) -> Option<usize> {
        self.chosen_option(question_id)
            .map(|option_id| (option_id.saturating_sub(1)) as usize)
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.chosen.iter().map(|(question, option)| (*question, *option))
    }
}

/// Contact details collected on the info page before the result reveal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub region: String,
    #[serde(default = "default_subscription")]
    pub email_subscription: bool,
}

const fn default_subscription() -> bool {
    true
}

/// Identifier wrapper for quiz sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// High level status tracked across the quiz lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizSessionStatus {
    InProgress,
    Completed,
}

impl QuizSessionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            QuizSessionStatus::InProgress => "in_progress",
            QuizSessionStatus::Completed => "completed",
        }
    }
}
