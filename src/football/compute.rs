use std::collections::HashMap;

use crate::cli::types::BoundaryMode;
use crate::football::types::{MatchFacts, PlayerPresence, PlayerScore};


/// Plus-minus per player, kept in the order players were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    scores: Vec<PlayerScore>,
    index: HashMap<String, usize>,
}

impl ScoreTable {
    /// A table holding every player from the given line-ups at zero, in
    /// first-appearance order.
    pub fn seeded<'a>(matches: impl IntoIterator<Item = &'a MatchFacts>) -> Self {
        matches
            .into_iter()
            .flat_map(|m| m.player_presences.iter())
            .fold(Self::default(), |table, p| table.with_player(&p.player))
    }

    /// Add `player` at zero unless already present.
    pub fn with_player(mut self, player: &str) -> Self {
        self.slot(player);
        self
    }

    /// Apply one match's goals to the players on the pitch.
    pub fn with_match(mut self, facts: &MatchFacts, boundary: BoundaryMode) -> Self {
        for (player, delta) in match_deltas(facts, boundary) {
            let slot = self.slot(player);
            self.scores[slot].score += delta;
        }
        self
    }

    /// Fold matches in order.
    pub fn with_matches<'a>(
        self,
        matches: impl IntoIterator<Item = &'a MatchFacts>,
        boundary: BoundaryMode,
    ) -> Self {
        matches
            .into_iter()
            .fold(self, |table, m| table.with_match(m, boundary))
    }

    pub fn get(&self, player: &str) -> Option<i32> {
        self.index.get(player).map(|&i| self.scores[i].score)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Scores by descending value; ties keep first-seen order.
    pub fn ranked(&self) -> Vec<PlayerScore> {
        let mut ranked = self.scores.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    fn slot(&mut self, player: &str) -> usize {
        if let Some(&i) = self.index.get(player) {
            return i;
        }
        let i = self.scores.len();
        self.scores.push(PlayerScore {
            player: player.to_string(),
            score: 0,
        });
        self.index.insert(player.to_string(), i);
        i
    }
}

/// Net goal difference one presence interval accumulated in a match.
pub fn presence_delta(
    presence: &PlayerPresence,
    our_goal_minutes: &[u32],
    opponent_goal_minutes: &[u32],
    boundary: BoundaryMode,
) -> i32 {
    let on_pitch = |minute: &&u32| boundary.contains(presence.in_minute, presence.out_minute, **minute);
    let scored = our_goal_minutes.iter().filter(on_pitch).count() as i32;
    let conceded = opponent_goal_minutes.iter().filter(on_pitch).count() as i32;
    scored - conceded
}

/// Per-presence score changes for one match, in line-up order.
pub fn match_deltas(facts: &MatchFacts, boundary: BoundaryMode) -> Vec<(&str, i32)> {
    facts
        .player_presences
        .iter()
        .map(|p| {
            let delta = presence_delta(
                p,
                &facts.our_goal_minutes,
                &facts.opponent_goal_minutes,
                boundary,
            );
            (p.player.as_str(), delta)
        })
        .collect()
}

/// Seed from `matches` and fold all of them.
pub fn aggregate(matches: &[MatchFacts], boundary: BoundaryMode) -> ScoreTable {
    ScoreTable::seeded(matches).with_matches(matches, boundary)
}
