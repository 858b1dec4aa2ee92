//! The card catalog: every playable problem, partitioned by difficulty tier.
//!
//! The catalog is fixed at construction and shared read-only across sessions
//! (wrap it in an `Arc`). One data file per tier keeps the card text out of
//! the way of the logic.

use crate::game_engine::models::{Answer, Difficulty, Problem};

mod easy;
mod hard;
mod intermediate;

/// Immutable collection of [`Problem`]s, one ordered list per tier.
#[derive(Debug, Clone)]
pub struct CardCatalog {
    easy: Vec<Problem>,
    intermediate: Vec<Problem>,
    hard: Vec<Problem>,
}

impl CardCatalog {
    /// Build a catalog from per-tier lists. Tests use this with small
    /// synthetic decks.
    pub fn new(easy: Vec<Problem>, intermediate: Vec<Problem>, hard: Vec<Problem>) -> Self {
        CardCatalog { easy, intermediate, hard }
    }

    /// The standard 12-problem catalog (4 per tier).
    pub fn standard() -> Self {
        CardCatalog {
            easy: easy::cards(),
            intermediate: intermediate::cards(),
            hard: hard::cards(),
        }
    }

    /// All problems of one tier, in catalog order.
    pub fn cards_for(&self, difficulty: Difficulty) -> &[Problem] {
        match difficulty {
            Difficulty::Easy         => &self.easy,
            Difficulty::Intermediate => &self.intermediate,
            Difficulty::Hard         => &self.hard,
        }
    }

    /// Every title in every tier, in tier order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        Difficulty::ALL
            .iter()
            .flat_map(|&d| self.cards_for(d))
            .map(|p| p.title.as_str())
    }
}

// ---------------------------------------------------------------------------
// Builders used by the per-tier data files
// ---------------------------------------------------------------------------

fn answer(text: &str, is_correct: bool, explanation: &str, points: u32) -> Answer {
    Answer {
        text: text.to_string(),
        is_correct,
        explanation: explanation.to_string(),
        points,
    }
}

fn problem(
    title: &str,
    description: &str,
    difficulty: Difficulty,
    category: &str,
    impact: &str,
    answers: Vec<Answer>,
) -> Problem {
    Problem {
        title: title.to_string(),
        description: description.to_string(),
        difficulty,
        category: category.to_string(),
        impact: impact.to_string(),
        answers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_catalog_has_four_problems_per_tier() {
        let catalog = CardCatalog::standard();
        for difficulty in Difficulty::ALL {
            assert_eq!(
                catalog.cards_for(difficulty).len(),
                4,
                "{difficulty} tier should hold 4 problems"
            );
        }
    }

    #[test]
    fn titles_are_unique_across_the_whole_catalog() {
        let catalog = CardCatalog::standard();
        let mut seen = HashSet::new();
        for title in catalog.titles() {
            assert!(seen.insert(title.to_string()), "Duplicate title: {title}");
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn every_problem_has_exactly_one_correct_answer() {
        let catalog = CardCatalog::standard();
        for difficulty in Difficulty::ALL {
            for problem in catalog.cards_for(difficulty) {
                let correct = problem.answers.iter().filter(|a| a.is_correct).count();
                assert_eq!(
                    correct, 1,
                    "'{}' must have exactly 1 correct answer (got {correct})",
                    problem.title
                );
                assert!(
                    problem.answers.len() >= 2,
                    "'{}' must offer at least 2 answers",
                    problem.title
                );
            }
        }
    }

    #[test]
    fn correct_answers_pay_the_tier_rate() {
        let catalog = CardCatalog::standard();
        for (difficulty, expected) in [
            (Difficulty::Easy, 3),
            (Difficulty::Intermediate, 6),
            (Difficulty::Hard, 10),
        ] {
            for problem in catalog.cards_for(difficulty) {
                let correct = problem.answers.iter().find(|a| a.is_correct).unwrap();
                assert_eq!(
                    correct.points, expected,
                    "'{}' correct answer should pay {expected}",
                    problem.title
                );
            }
        }
    }

    #[test]
    fn every_answer_has_non_empty_text_and_explanation() {
        let catalog = CardCatalog::standard();
        for difficulty in Difficulty::ALL {
            for problem in catalog.cards_for(difficulty) {
                assert!(!problem.description.is_empty(), "'{}' description", problem.title);
                assert!(!problem.impact.is_empty(), "'{}' impact", problem.title);
                for answer in &problem.answers {
                    assert!(!answer.text.is_empty(), "'{}' answer text", problem.title);
                    assert!(
                        !answer.explanation.is_empty(),
                        "'{}' answer explanation",
                        problem.title
                    );
                }
            }
        }
    }
}
