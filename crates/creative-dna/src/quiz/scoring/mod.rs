//! Three-tier resolution of accumulated scores to a single winning category.
//!
//! Tier 1 takes a strict maximum. Tier 2 layers fractional heuristic bonuses
//! derived from which option was chosen on particular questions. Tier 3 breaks
//! anything still tied with a fixed priority order. Every input, including an
//! empty answer set, resolves to exactly one category.

mod adjustments;

pub(crate) use adjustments::apply_adjustments;

use serde::{Deserialize, Serialize};

use super::domain::{AnswerSet, Category, CategoryScores};

/// Fixed total order used as the last-resort tie-break.
pub const PRIORITY_ORDER: [Category; 6] = [
    Category::Visual,
    Category::Maker,
    Category::Nomad,
    Category::Reform,
    Category::Tidy,
    Category::Illuma,
];

/// Which disambiguation layer produced the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionTier {
    DirectMaximum,
    HeuristicAdjustment,
    PriorityFallback,
}

impl ResolutionTier {
    pub const fn label(self) -> &'static str {
        match self {
            ResolutionTier::DirectMaximum => "direct maximum",
            ResolutionTier::HeuristicAdjustment => "heuristic adjustment",
            ResolutionTier::PriorityFallback => "priority fallback",
        }
    }
}

/// Outcome of a resolution: the winning category and the tier that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub category: Category,
    pub tier: ResolutionTier,
}

/// Resolve accumulated scores plus the answer set to one category.
///
/// Pure and deterministic: identical inputs always return the identical
/// winner, and ties never escape to the caller.
pub fn resolve(scores: &CategoryScores, answers: &AnswerSet) -> Resolution {
    let leaders = scores.leaders();
    if let [winner] = leaders.as_slice() {
        return Resolution {
            category: *winner,
            tier: ResolutionTier::DirectMaximum,
        };
    }

    let adjusted = apply_adjustments(scores, answers);
    let leaders = adjusted.leaders();
    if let [winner] = leaders.as_slice() {
        return Resolution {
            category: *winner,
            tier: ResolutionTier::HeuristicAdjustment,
        };
    }

    // leaders is never empty, so the priority scan always finds a match.
    let category = PRIORITY_ORDER
        .into_iter()
        .find(|candidate| leaders.contains(candidate))
        .unwrap_or(Category::Visual);

    Resolution {
        category,
        tier: ResolutionTier::PriorityFallback,
    }
}
