//! # strategy_card_game
//!
//! A fully offline, in-memory trivia card game about supply-chain and
//! merchant strategy. Players draw "strategy problem" cards from three
//! difficulty tiers, pick one of the multiple-choice answers, and build up
//! score with per-tier streak bonuses; a ranking table orders completed
//! sessions into a leaderboard.
//!
//! ## How it works
//!
//! 1. Build a [`CardCatalog`] (usually [`CardCatalog::standard`]) and share
//!    it behind an `Arc` — it is read-only for its whole life.
//! 2. Create a [`GameSession`] per player. Repeatedly call
//!    [`draw_card`](GameSession::draw_card) with a [`Difficulty`] and
//!    [`submit_answer`](GameSession::submit_answer) with the chosen index;
//!    each graded answer returns an [`AnswerOutcome`] with points and the
//!    answer's explanation.
//! 3. Read live [`stats`](GameSession::stats) at any point, then
//!    [`finalize`](GameSession::finalize) — the streak bonus is applied once
//!    and the final snapshot comes back.
//! 4. Hand the final score to a [`RankingTable`] via
//!    [`record`](RankingTable::record); query it with
//!    [`leaderboard`](RankingTable::leaderboard) and
//!    [`rank_of`](RankingTable::rank_of).
//!
//! ## Key properties
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to a session to replay
//!   the exact same card sequence — useful for tests and demos.
//! - **No repeats until exhaustion**: a session never re-draws a card it has
//!   already seen until the chosen tier runs dry, at which point the tier
//!   reopens (see [`draw_card`](GameSession::draw_card) for the exact reset
//!   rule).
//! - **Result values, not panics**: answering with no card in play or with
//!   an out-of-range index returns a zero-point [`AnswerOutcome`] carrying a
//!   message; nothing in the core throws across the API boundary.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use strategy_card_game::{CardCatalog, Difficulty, GameSession, RankingTable};
//!
//! let catalog = Arc::new(CardCatalog::standard());
//! let mut session = GameSession::new("Ada", Arc::clone(&catalog), Some(42));
//!
//! let card = session.draw_card(Difficulty::Easy);
//! println!("Q: {}", card.description);
//! let outcome = session.submit_answer(0);
//! println!("correct={} points={}", outcome.correct, outcome.points);
//!
//! let report = session.finalize();
//! let mut rankings = RankingTable::new();
//! rankings.record(
//!     report.stats.player_name.clone(),
//!     report.final_score,
//!     report.stats.accuracy,
//!     report.stats.cards_played,
//! );
//! for entry in rankings.leaderboard(10) {
//!     println!("{}: {}", entry.name, entry.score);
//! }
//! ```

pub mod game_engine;

// Convenience re-exports so callers can use `strategy_card_game::GameSession`
// directly without reaching into `game_engine::`.
pub use game_engine::{
    Answer, AnswerOutcome, CardCatalog, Difficulty, FinalStats, GameSession, Problem,
    RankingEntry, RankingTable, SessionStats,
};
