//! Process-wide record of completed sessions and the orderings over it.

use crate::game_engine::models::RankingEntry;

/// Append-only sequence of finalized-session results. Entries are never
/// mutated or removed; the same name may appear once per completed session.
#[derive(Debug, Clone, Default)]
pub struct RankingTable {
    entries: Vec<RankingEntry>,
}

impl RankingTable {
    pub fn new() -> Self {
        RankingTable { entries: Vec::new() }
    }

    /// Append one finalized session. No dedup, no validation.
    pub fn record(
        &mut self,
        name: impl Into<String>,
        score: u32,
        accuracy: f64,
        cards_played: u32,
    ) {
        self.entries.push(RankingEntry {
            name: name.into(),
            score,
            accuracy,
            cards_played,
        });
    }

    /// Recorded entries in insertion order.
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    /// Top `top_n` entries, descending by `(score, accuracy, cards_played)`.
    /// The sort is stable, so entries tied on all three keys keep insertion
    /// order.
    pub fn leaderboard(&self, top_n: usize) -> Vec<RankingEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.accuracy.total_cmp(&a.accuracy))
                .then_with(|| b.cards_played.cmp(&a.cards_played))
        });
        sorted.truncate(top_n);
        sorted
    }

    /// 1-based rank of the first entry whose name matches `name`
    /// case-insensitively, or `None` when no entry matches.
    ///
    /// Ranks here order by `(score, accuracy)` only — unlike
    /// [`leaderboard`](Self::leaderboard), `cards_played` does not break
    /// ties. The two orderings can disagree on tied entries; both are kept
    /// as-is.
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        let mut sorted: Vec<&RankingEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.accuracy.total_cmp(&a.accuracy))
        });
        let needle = name.to_lowercase();
        sorted
            .iter()
            .position(|entry| entry.name.to_lowercase() == needle)
            .map(|index| index + 1)
    }
}
