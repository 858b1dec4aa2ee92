//! Full demo of a seeded game session, from first draw to leaderboard.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `strategy_card_game` works end to end:
//!
//! 1. **One scripted session** — a seeded session draws across all three
//!    tiers, answers a mix of right and wrong picks, and prints the graded
//!    outcome after each card.
//! 2. **Live stats** — the session snapshot is printed as JSON mid-game,
//!    showing the pending (unapplied) streak bonus.
//! 3. **Finalize + rankings** — the session is finalized, several more
//!    seeded sessions are recorded, and the leaderboard and a rank lookup
//!    are printed.
//!
//! ## Key concepts demonstrated
//!
//! - `rng_seed: Some(u64)` makes the card sequence fully deterministic.
//! - A wrong answer resets only that tier's streak; other tiers keep theirs.
//! - `finalize()` applies the streak bonus exactly once.
//! - `leaderboard()` and `rank_of()` deliberately use different tie-breaks.

use std::sync::Arc;

use strategy_card_game::{CardCatalog, Difficulty, GameSession, Problem, RankingTable};

/// Index of the correct answer on `card` (the demo plays with open cards).
fn correct_index(card: &Problem) -> isize {
    card.answers
        .iter()
        .position(|a| a.is_correct)
        .expect("catalog cards always have a correct answer") as isize
}

/// Index of the first incorrect answer on `card`.
fn wrong_index(card: &Problem) -> isize {
    card.answers
        .iter()
        .position(|a| !a.is_correct)
        .expect("catalog cards always have an incorrect answer") as isize
}

/// Draw one card, answer it, and pretty-print the graded outcome.
fn play_one(session: &mut GameSession, difficulty: Difficulty, answer_correctly: bool) {
    let card = session.draw_card(difficulty);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{difficulty}] {}  ({})", card.title, card.category);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {}", card.description);
    for answer in &card.answers {
        println!("    {}", answer.text);
    }

    let index = if answer_correctly {
        correct_index(&card)
    } else {
        wrong_index(&card)
    };
    let outcome = session.submit_answer(index);
    let marker = if outcome.correct { "✓" } else { "✗" };
    println!();
    println!("  Picked #{index} {marker}  +{} points", outcome.points);
    println!("  {}", outcome.explanation);
    println!();
}

fn main() {
    let catalog = Arc::new(CardCatalog::standard());

    // ── One scripted session ─────────────────────────────────────────────────
    // Fixed seed: the same cards come out in the same order on every run.
    println!();
    println!("══ Scripted session: Ada, seed=42 ══");
    println!();
    let mut session = GameSession::new("Ada", Arc::clone(&catalog), Some(42));

    // Three easy wins build a streak worth a bonus at finalize time.
    for _ in 0..3 {
        play_one(&mut session, Difficulty::Easy, true);
    }
    // A hard win starts a second streak; a hard miss wipes it again.
    play_one(&mut session, Difficulty::Hard, true);
    play_one(&mut session, Difficulty::Hard, false);
    // One intermediate win on the way out.
    play_one(&mut session, Difficulty::Intermediate, true);

    // ── Live stats ───────────────────────────────────────────────────────────
    // The snapshot carries the pending streak bonus; the score does not
    // include it yet.
    println!("══ Live stats (pending bonus not yet applied) ══");
    println!();
    let stats = session.stats();
    println!(
        "{}",
        serde_json::to_string_pretty(&stats).expect("stats serialize")
    );
    println!();

    // ── Finalize + rankings ──────────────────────────────────────────────────
    let report = session.finalize();
    println!("══ Final report ══");
    println!();
    println!(
        "  bonus applied: {}   final score: {}   accuracy: {:.1}%",
        report.streak_bonus_applied, report.final_score, report.stats.accuracy
    );
    println!();

    let mut rankings = RankingTable::new();
    rankings.record(
        report.stats.player_name.clone(),
        report.final_score,
        report.stats.accuracy,
        report.stats.cards_played,
    );

    // A few more seeded sessions fill out the board.
    for (name, seed, wins, tier) in [
        ("Grace", 7u64, 4u32, Difficulty::Hard),
        ("Linus", 99, 2, Difficulty::Intermediate),
        ("Edsger", 1, 3, Difficulty::Easy),
    ] {
        let mut s = GameSession::new(name, Arc::clone(&catalog), Some(seed));
        for _ in 0..wins {
            let card = s.draw_card(tier);
            s.submit_answer(correct_index(&card));
        }
        let r = s.finalize();
        rankings.record(name, r.final_score, r.stats.accuracy, r.stats.cards_played);
    }

    println!("══ Leaderboard ══");
    println!();
    for (rank, entry) in rankings.leaderboard(10).iter().enumerate() {
        println!(
            "  #{:<2} {:<8} score {:<4} accuracy {:>5.1}%  cards {}",
            rank + 1,
            entry.name,
            entry.score,
            entry.accuracy,
            entry.cards_played
        );
    }
    println!();
    match rankings.rank_of("ada") {
        Some(rank) => println!("  rank_of(\"ada\") → #{rank}"),
        None => println!("  rank_of(\"ada\") → not on the board"),
    }
    println!();
}
