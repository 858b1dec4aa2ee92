use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Difficulty tiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Intermediate,
    Hard,
}

impl Difficulty {
    /// All tiers in canonical (ascending) order.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Easy,
        Difficulty::Intermediate,
        Difficulty::Hard,
    ];

    /// Stable index used for fixed-size per-tier counters.
    pub fn index(self) -> usize {
        match self {
            Difficulty::Easy         => 0,
            Difficulty::Intermediate => 1,
            Difficulty::Hard         => 2,
        }
    }

    /// Streak-bonus multiplier: harder tiers pay more per streak step.
    pub fn bonus_multiplier(self) -> u32 {
        match self {
            Difficulty::Easy         => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Hard         => 5,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy         => write!(f, "Easy"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Hard         => write!(f, "Hard"),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog entries
// ---------------------------------------------------------------------------

/// One candidate response to a [`Problem`].
///
/// `points` is awarded only when this answer is both chosen and correct.
/// Catalog data may carry a nonzero `points` on incorrect answers (a measure
/// of how close the answer is to right); it is never awarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
    pub explanation: String,
    pub points: u32,
}

/// A strategy problem card. `title` is the unique identifier within the
/// catalog; exactly one answer is marked correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub impact: String,
    pub answers: Vec<Answer>,
}

// ---------------------------------------------------------------------------
// Session result types
// ---------------------------------------------------------------------------

/// Graded result of one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub points: u32,
    pub explanation: String,
}

impl AnswerOutcome {
    /// A non-scoring outcome carrying only an explanatory message.
    pub(crate) fn rejected(message: &str) -> Self {
        AnswerOutcome {
            correct: false,
            points: 0,
            explanation: message.to_string(),
        }
    }
}

/// Immutable snapshot of a session's counters.
///
/// `streak_bonus` is the bonus the current streaks would pay out — it is
/// *not* yet included in `score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub player_name: String,
    pub score: u32,
    pub cards_played: u32,
    pub cards_won: u32,
    pub accuracy: f64,
    pub easy_streak: u32,
    pub intermediate_streak: u32,
    pub hard_streak: u32,
    pub streak_bonus: u32,
}

/// Terminal session report: the post-bonus snapshot plus the bonus that was
/// just applied and the resulting final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalStats {
    pub stats: SessionStats,
    pub streak_bonus_applied: u32,
    pub final_score: u32,
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// One finalized session, as recorded on the ranking table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub score: u32,
    pub accuracy: f64,
    pub cards_played: u32,
}
