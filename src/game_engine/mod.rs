//! Core game engine — catalog access, session state, scoring, and rankings.
//!
//! ## Module overview
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `models`  | All shared types: tiers, problems, answers, outcomes, snapshots |
//! | `catalog` | Immutable per-tier card collections and the standard card set |
//! | `session` | One player's game: draws, grading, streaks, finalize |
//! | `ranking` | Completed-session records, leaderboard, and rank lookup |

pub mod catalog;
pub mod models;
pub mod ranking;
pub mod session;

// Re-export the public API surface so callers can use
// `game_engine::GameSession` without reaching into sub-modules.
pub use catalog::CardCatalog;
pub use models::{
    Answer, AnswerOutcome, Difficulty, FinalStats, Problem, RankingEntry, SessionStats,
};
pub use ranking::RankingTable;
pub use session::GameSession;
