//! Match roster state: pool sources, side assignment, lock flag and lifecycle.

use crate::models::participant::ParticipantId;
use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Sport a match is played as when none is given.
pub const DEFAULT_SPORT: &str = "soccer";

/// Errors that can occur during roster and match operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// The match is locked; its roster cannot be changed.
    MatchLocked,
    /// Cannot lock a match with no assigned participants.
    EmptyRoster,
    /// The match is not in a state that allows this action.
    InvalidState,
    /// No match with this id exists in the league.
    MatchNotFound(MatchId),
    /// No team with this id exists in the league.
    TeamNotFound(TeamId),
    /// No participant with this id exists in the league.
    ParticipantNotFound(ParticipantId),
    /// Both roster slots of the match are already taken.
    RosterSlotsFull,
    /// A team with this name already exists (case-insensitive).
    DuplicateTeamName,
    /// Names must be non-empty after trimming.
    InvalidName,
    /// A roster import row could not be accepted.
    InvalidImport { line: u64, reason: String },
    /// A team's sport differs from the match's sport.
    SportMismatch { expected: String, found: String },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::MatchLocked => write!(f, "Match is locked"),
            RosterError::EmptyRoster => write!(f, "No assignments to lock"),
            RosterError::InvalidState => write!(f, "Invalid state for this action"),
            RosterError::MatchNotFound(_) => write!(f, "Match not found"),
            RosterError::TeamNotFound(_) => write!(f, "Team not found"),
            RosterError::ParticipantNotFound(_) => write!(f, "Participant not found"),
            RosterError::RosterSlotsFull => write!(f, "Both roster slots are filled"),
            RosterError::DuplicateTeamName => write!(f, "A team with this name already exists"),
            RosterError::InvalidName => write!(f, "Name must not be empty"),
            RosterError::InvalidImport { line, reason } => {
                write!(f, "Invalid roster row on line {}: {}", line, reason)
            }
            RosterError::SportMismatch { expected, found } => {
                write!(f, "Teams must play the same sport ({} vs {})", expected, found)
            }
        }
    }
}

impl std::error::Error for RosterError {}

/// One of the two sides a match is split into.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The opposing side.
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// A single (participant, side) row of a match assignment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub participant_id: ParticipantId,
    pub side: Side,
}

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Unlocked, nobody assigned yet.
    #[default]
    Open,
    /// Unlocked with at least one assignment.
    Assigned,
    /// Roster frozen; result can be recorded.
    Locked,
    /// Result recorded.
    Completed,
    /// Called off; no further changes.
    Void,
}

impl MatchStatus {
    /// Wire name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Open => "open",
            MatchStatus::Assigned => "assigned",
            MatchStatus::Locked => "locked",
            MatchStatus::Completed => "completed",
            MatchStatus::Void => "void",
        }
    }
}

/// Per-match roster state. Mutated only through the functions in `logic::roster`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchRoster {
    pub id: MatchId,
    /// First pool source (team slot 1).
    pub roster_a: Option<TeamId>,
    /// Second pool source (team slot 2).
    pub roster_b: Option<TeamId>,
    /// Both roster slots must hold teams of this sport.
    pub sport: String,
    /// At most one row per participant, in assignment order.
    pub assignment: Vec<Assignment>,
    pub status: MatchStatus,
    /// Set once a result is recorded.
    pub winner: Option<Side>,
    pub location: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl MatchRoster {
    /// New unlocked match with an empty assignment.
    pub fn new(roster_a: Option<TeamId>, roster_b: Option<TeamId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            roster_a,
            roster_b,
            sport: DEFAULT_SPORT.to_string(),
            assignment: Vec::new(),
            status: MatchStatus::Open,
            winner: None,
            location: None,
            scheduled_at: None,
            created_at: Utc::now(),
        }
    }

    /// True while the roster is frozen.
    pub fn is_locked(&self) -> bool {
        self.status == MatchStatus::Locked
    }

    /// Completed and void matches accept no further changes except voiding a completed one.
    pub fn is_closed(&self) -> bool {
        matches!(self.status, MatchStatus::Completed | MatchStatus::Void)
    }

    /// Side `participant_id` is assigned to, if any.
    pub fn side_of(&self, participant_id: ParticipantId) -> Option<Side> {
        self.assignment
            .iter()
            .find(|a| a.participant_id == participant_id)
            .map(|a| a.side)
    }

    /// Participant ids on `side`, in assignment order.
    pub fn side_members(&self, side: Side) -> Vec<ParticipantId> {
        self.assignment
            .iter()
            .filter(|a| a.side == side)
            .map(|a| a.participant_id)
            .collect()
    }

    /// Team occupying the roster slot that corresponds to `side` (slot 1 = A).
    pub fn team_for_side(&self, side: Side) -> Option<TeamId> {
        match side {
            Side::A => self.roster_a,
            Side::B => self.roster_b,
        }
    }

    /// Status an unlocked, open match should have given its current assignment.
    pub(crate) fn unlocked_status(&self) -> MatchStatus {
        if self.assignment.is_empty() {
            MatchStatus::Open
        } else {
            MatchStatus::Assigned
        }
    }
}
