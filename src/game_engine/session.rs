//! One player's in-progress game: draw state, scoring, streaks, finalize.

use std::collections::HashSet;
use std::sync::Arc;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game_engine::{
    catalog::CardCatalog,
    models::{AnswerOutcome, Difficulty, FinalStats, Problem, SessionStats},
};

/// Mutable state of a single session. Created with zeroed counters and no
/// current card; mutated only by [`draw_card`](GameSession::draw_card),
/// [`submit_answer`](GameSession::submit_answer), and the one end-of-session
/// bonus application.
///
/// One session is driven by one logical caller at a time; concurrent access
/// must be serialized by whoever owns the session (the boundary layer).
pub struct GameSession {
    player_name: String,
    score: u32,
    cards_played: u32,
    cards_won: u32,
    current_card: Option<Problem>,
    streaks: [u32; 3],
    used_cards: HashSet<String>,
    catalog: Arc<CardCatalog>,
    rng: StdRng,
}

impl GameSession {
    /// Start a session for `player_name` over a shared catalog.
    ///
    /// `rng_seed: Some(u64)` makes every draw reproducible — the same seed
    /// against the same catalog replays the same card sequence. `None` seeds
    /// from entropy.
    pub fn new(
        player_name: impl Into<String>,
        catalog: Arc<CardCatalog>,
        rng_seed: Option<u64>,
    ) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        GameSession {
            player_name: player_name.into(),
            score: 0,
            cards_played: 0,
            cards_won: 0,
            current_card: None,
            streaks: [0; 3],
            used_cards: HashSet::new(),
            catalog,
            rng,
        }
    }

    /// Draw a uniformly random not-yet-used card from `difficulty`, mark it
    /// used, and make it the current card.
    ///
    /// When every card of the tier has been used, the tier's full list
    /// becomes available again and the used set is rebuilt as the whole
    /// catalog's titles minus that list. The rebuild is catalog-wide, not
    /// tier-scoped: a reset here also marks every other tier's cards used
    /// until those tiers exhaust in turn. Surprising, but sessions depend on
    /// the re-draw pattern it produces, so it stays.
    pub fn draw_card(&mut self, difficulty: Difficulty) -> Problem {
        let pool = self.catalog.cards_for(difficulty);
        let mut available: Vec<&Problem> = pool
            .iter()
            .filter(|card| !self.used_cards.contains(&card.title))
            .collect();

        if available.is_empty() {
            available = pool.iter().collect();
            let reopened: HashSet<&str> =
                available.iter().map(|card| card.title.as_str()).collect();
            let reset: HashSet<String> = self
                .catalog
                .titles()
                .filter(|title| !reopened.contains(title))
                .map(str::to_string)
                .collect();
            self.used_cards = reset;
        }

        let card = available[self.rng.gen_range(0..available.len())].clone();
        self.used_cards.insert(card.title.clone());
        self.current_card = Some(card.clone());
        self.cards_played += 1;
        card
    }

    /// Grade the answer at `answer_index` on the current card.
    ///
    /// With no card in play, or with an index outside the card's answer
    /// list (negative included), returns a zero-point outcome carrying an
    /// explanatory message and mutates nothing. A graded submit consumes
    /// the current card; answering again without a redraw gets the no-card
    /// outcome.
    pub fn submit_answer(&mut self, answer_index: isize) -> AnswerOutcome {
        let card = match self.current_card.take() {
            Some(card) => card,
            None => return AnswerOutcome::rejected("No card drawn yet!"),
        };

        if answer_index < 0 || answer_index as usize >= card.answers.len() {
            // Out-of-range picks leave the card in play.
            self.current_card = Some(card);
            return AnswerOutcome::rejected("Invalid answer selection.");
        }

        let answer = &card.answers[answer_index as usize];
        if answer.is_correct {
            self.cards_won += 1;
            self.score += answer.points;
            self.streaks[card.difficulty.index()] += 1;
            AnswerOutcome {
                correct: true,
                points: answer.points,
                explanation: answer.explanation.clone(),
            }
        } else {
            self.streaks[card.difficulty.index()] = 0;
            AnswerOutcome {
                correct: false,
                points: 0,
                explanation: answer.explanation.clone(),
            }
        }
    }

    /// Bonus the current streaks would pay out: every tier at streak ≥ 3
    /// contributes `(streak - 2) × multiplier`. Streaks of 1–2 pay nothing.
    pub fn streak_bonus(&self) -> u32 {
        Difficulty::ALL
            .iter()
            .map(|&difficulty| {
                let streak = self.streaks[difficulty.index()];
                if streak >= 3 {
                    (streak - 2) * difficulty.bonus_multiplier()
                } else {
                    0
                }
            })
            .sum()
    }

    /// Add [`streak_bonus`](Self::streak_bonus) to the score and return it.
    ///
    /// There is no double-application guard — calling this twice pays the
    /// bonus twice. [`finalize`](Self::finalize) calls it exactly once.
    pub fn apply_streak_bonus(&mut self) -> u32 {
        let bonus = self.streak_bonus();
        self.score += bonus;
        bonus
    }

    /// Percentage of draws answered correctly; `0.0` before the first draw.
    pub fn accuracy(&self) -> f64 {
        if self.cards_played == 0 {
            return 0.0;
        }
        f64::from(self.cards_won) / f64::from(self.cards_played) * 100.0
    }

    /// Snapshot of all counters. `streak_bonus` in the snapshot is the
    /// pending (unapplied) bonus.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            player_name: self.player_name.clone(),
            score: self.score,
            cards_played: self.cards_played,
            cards_won: self.cards_won,
            accuracy: self.accuracy(),
            easy_streak: self.streaks[Difficulty::Easy.index()],
            intermediate_streak: self.streaks[Difficulty::Intermediate.index()],
            hard_streak: self.streaks[Difficulty::Hard.index()],
            streak_bonus: self.streak_bonus(),
        }
    }

    /// End the session: apply the streak bonus once and return the
    /// post-bonus snapshot together with the bonus amount and final score.
    /// Further draws or answers after this are the caller's mistake; the
    /// engine does not police them.
    pub fn finalize(&mut self) -> FinalStats {
        let bonus = self.apply_streak_bonus();
        FinalStats {
            stats: self.stats(),
            streak_bonus_applied: bonus,
            final_score: self.score,
        }
    }

    // -- read-only accessors -------------------------------------------------

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn cards_played(&self) -> u32 {
        self.cards_played
    }

    pub fn cards_won(&self) -> u32 {
        self.cards_won
    }

    /// Current streak for one tier.
    pub fn streak(&self, difficulty: Difficulty) -> u32 {
        self.streaks[difficulty.index()]
    }

    /// The card awaiting an answer, if any.
    pub fn current_card(&self) -> Option<&Problem> {
        self.current_card.as_ref()
    }

    /// Titles drawn so far this session (after any exhaustion reset, the
    /// rebuilt set).
    pub fn used_titles(&self) -> &HashSet<String> {
        &self.used_cards
    }
}
