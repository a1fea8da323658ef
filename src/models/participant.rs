//! Participant data structures: the balancing input and its win/loss record.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant (used in assignments and lookups).
pub type ParticipantId = Uuid;

/// Record view of a participant (for API / display).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub wins: u32,
    pub losses: u32,
    pub games_played: u32,
}

/// A player eligible for match pools.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub skill_rating: u32,
    /// None for free agents.
    pub team_id: Option<TeamId>,
    pub wins: u32,
    pub losses: u32,
}

impl Participant {
    /// Create a free agent with the given name and rating.
    pub fn new(name: impl Into<String>, skill_rating: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            skill_rating,
            team_id: None,
            wins: 0,
            losses: 0,
        }
    }

    /// Same as [`Participant::new`] but already on a team roster.
    pub fn on_team(name: impl Into<String>, skill_rating: u32, team_id: TeamId) -> Self {
        Self {
            team_id: Some(team_id),
            ..Self::new(name, skill_rating)
        }
    }

    /// Win/loss summary for display.
    pub fn record(&self) -> ParticipantRecord {
        ParticipantRecord {
            wins: self.wins,
            losses: self.losses,
            games_played: self.wins + self.losses,
        }
    }

    /// Count a won match.
    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    /// Count a lost match.
    pub fn add_loss(&mut self) {
        self.losses += 1;
    }
}

/// Sum of skill ratings, widened so large pools cannot overflow.
pub fn total_skill(participants: &[Participant]) -> u64 {
    participants.iter().map(|p| u64::from(p.skill_rating)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_games() {
        let mut p = Participant::new("Ana", 70);
        p.add_win();
        p.add_win();
        p.add_loss();
        assert_eq!(
            p.record(),
            ParticipantRecord {
                wins: 2,
                losses: 1,
                games_played: 3
            }
        );
    }

    #[test]
    fn total_skill_does_not_overflow_u32() {
        let pool = vec![Participant::new("a", u32::MAX), Participant::new("b", u32::MAX)];
        assert_eq!(total_skill(&pool), 2 * u64::from(u32::MAX));
    }
}
