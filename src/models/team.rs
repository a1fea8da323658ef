//! Team: a named roster that can fill one slot of a match.

use crate::models::participant::ParticipantId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

/// A registered team with its roster and match tallies.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// None when the team never declared a sport; it then fits any match.
    pub sport: Option<String>,
    /// Roster in join order.
    pub players: Vec<ParticipantId>,
    pub matches_won: u32,
    pub matches_lost: u32,
}

impl Team {
    /// Create a team with an empty roster and no declared sport.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sport: None,
            players: Vec::new(),
            matches_won: 0,
            matches_lost: 0,
        }
    }

    /// Sport this team plays in a match of `match_sport` (its own, or the match's if undeclared).
    pub fn sport_or<'a>(&'a self, match_sport: &'a str) -> &'a str {
        self.sport.as_deref().unwrap_or(match_sport)
    }

    /// Add a participant to the roster; no-op if already present.
    pub fn add_player(&mut self, participant_id: ParticipantId) {
        if !self.players.contains(&participant_id) {
            self.players.push(participant_id);
        }
    }
}
