//! Tier-2 heuristic bonuses.
//!
//! Five independent rules, each keyed to the zero-based choice index of
//! specific questions. A rule is skipped when its questions are unanswered and
//! applied unconditionally otherwise; all five may fire in one resolution. The
//! fractional weights are fixed product constants and are kept exactly as
//! tuned, not rebalanced.

use super::super::domain::{AnswerSet, Category, CategoryScores};

pub(crate) fn apply_adjustments(scores: &CategoryScores, answers: &AnswerSet) -> CategoryScores {
    let mut adjusted = *scores;
    instinct_consistency(&mut adjusted, answers);
    workshop_blend(&mut adjusted, answers);
    approach_linkage(&mut adjusted, answers);
    workspace_blend(&mut adjusted, answers);
    learning_blend(&mut adjusted, answers);
    adjusted
}

/// Q1 & Q3 probe the same instinct with the same index -> category mapping.
/// Matching picks show a consistent leaning and earn a larger bonus; split
/// picks spread a smaller bonus across both leanings.
fn instinct_consistency(scores: &mut CategoryScores, answers: &AnswerSet) {
    const LEANINGS: [Category; 3] = [Category::Tidy, Category::Illuma, Category::Nomad];

    let (Some(first), Some(second)) = (answers.choice_index(1), answers.choice_index(3)) else {
        return;
    };

    if first == second {
        if let Some(category) = LEANINGS.get(first) {
            scores.add(*category, 0.5);
        }
    } else {
        for choice in [first, second] {
            if let Some(category) = LEANINGS.get(choice) {
                scores.add(*category, 0.2);
            }
        }
    }
}

/// Q2: the middle option is a deliberate REFORM/MAKER blend weighted toward
/// REFORM; the outer options are pure leanings.
fn workshop_blend(scores: &mut CategoryScores, answers: &AnswerSet) {
    match answers.choice_index(2) {
        Some(0) => scores.add(Category::Maker, 0.6),
        Some(1) => {
            scores.add(Category::Reform, 0.4);
            scores.add(Category::Maker, 0.3);
        }
        Some(2) => scores.add(Category::Illuma, 0.4),
        _ => {}
    }
}

/// Q4, Q5, and Q8 share one index -> category mapping. Each answer earns a
/// flat bonus for its mapped category, and any index chosen at least twice
/// earns an additional dominance bonus on top.
fn approach_linkage(scores: &mut CategoryScores, answers: &AnswerSet) {
    const LEANINGS: [Category; 3] = [Category::Maker, Category::Reform, Category::Visual];

    let (Some(first), Some(second), Some(third)) = (
        answers.choice_index(4),
        answers.choice_index(5),
        answers.choice_index(8),
    ) else {
        return;
    };

    let mut counts = [0u8; 3];
    for choice in [first, second, third] {
        if let Some(category) = LEANINGS.get(choice) {
            scores.add(*category, 0.15);
            counts[choice] += 1;
        }
    }

    for (index, count) in counts.iter().enumerate() {
        if *count >= 2 {
            scores.add(LEANINGS[index], 0.4);
        }
    }
}

/// Q6: pure TIDY, a MAKER/REFORM blend, or a VISUAL/ILLUMA blend.
fn workspace_blend(scores: &mut CategoryScores, answers: &AnswerSet) {
    match answers.choice_index(6) {
        Some(0) => scores.add(Category::Tidy, 0.5),
        Some(1) => {
            scores.add(Category::Maker, 0.25);
            scores.add(Category::Reform, 0.25);
        }
        Some(2) => {
            scores.add(Category::Visual, 0.25);
            scores.add(Category::Illuma, 0.25);
        }
        _ => {}
    }
}

/// Q7: a MAKER/TIDY blend, pure NOMAD, or an ILLUMA/VISUAL blend.
fn learning_blend(scores: &mut CategoryScores, answers: &AnswerSet) {
    match answers.choice_index(7) {
        Some(0) => {
            scores.add(Category::Maker, 0.25);
            scores.add(Category::Tidy, 0.25);
        }
        Some(1) => scores.add(Category::Nomad, 0.5),
        Some(2) => {
            scores.add(Category::Illuma, 0.25);
            scores.add(Category::Visual, 0.25);
        }
        _ => {}
    }
}
