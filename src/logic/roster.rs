//! Roster operations on a single match: rebalance, manual assignment, lock, result, void.

use crate::logic::partition::{balance, random_split_with, Split};
use crate::models::{
    Assignment, MatchRoster, MatchStatus, Participant, ParticipantId, RosterError, Side, TeamId,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How `rebalance` splits the pool.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebalanceMode {
    /// Minimize the skill difference.
    #[default]
    Balanced,
    /// Random split, skill ignored.
    Shuffled,
}

/// Locked matches report `MatchLocked`; completed and void ones `InvalidState`.
pub(crate) fn ensure_mutable(roster: &MatchRoster) -> Result<(), RosterError> {
    if roster.is_locked() {
        return Err(RosterError::MatchLocked);
    }
    if roster.is_closed() {
        return Err(RosterError::InvalidState);
    }
    Ok(())
}

/// Split `pool` and replace the match's whole assignment with the result.
pub fn rebalance(
    roster: &mut MatchRoster,
    pool: &[Participant],
    mode: RebalanceMode,
) -> Result<Split, RosterError> {
    rebalance_with(roster, pool, mode, &mut rand::thread_rng())
}

/// [`rebalance`] with a caller-supplied RNG for shuffled mode.
pub fn rebalance_with<R: Rng + ?Sized>(
    roster: &mut MatchRoster,
    pool: &[Participant],
    mode: RebalanceMode,
    rng: &mut R,
) -> Result<Split, RosterError> {
    ensure_mutable(roster)?;
    let (side_a, side_b) = match mode {
        RebalanceMode::Balanced => balance(pool),
        RebalanceMode::Shuffled => random_split_with(pool, rng),
    };
    let assignment: Vec<Assignment> = side_a
        .iter()
        .map(|p| (p, Side::A))
        .chain(side_b.iter().map(|p| (p, Side::B)))
        .map(|(p, side)| Assignment {
            participant_id: p.id,
            side,
        })
        .collect();
    // Built in full before the swap; the old assignment is never partially visible.
    roster.assignment = assignment;
    roster.status = roster.unlocked_status();
    Ok((side_a, side_b))
}

/// Put one participant on `side`, or unassign them with `None`.
pub fn assign_one(
    roster: &mut MatchRoster,
    participant_id: ParticipantId,
    side: Option<Side>,
) -> Result<(), RosterError> {
    ensure_mutable(roster)?;
    roster.assignment.retain(|a| a.participant_id != participant_id);
    if let Some(side) = side {
        roster.assignment.push(Assignment {
            participant_id,
            side,
        });
    }
    roster.status = roster.unlocked_status();
    Ok(())
}

/// Lock an unlocked match (needs at least one assignment) or unlock a locked one.
/// Returns the new status.
pub fn toggle_lock(roster: &mut MatchRoster) -> Result<MatchStatus, RosterError> {
    roster.status = match roster.status {
        MatchStatus::Locked => roster.unlocked_status(),
        MatchStatus::Open | MatchStatus::Assigned => {
            if roster.assignment.is_empty() {
                return Err(RosterError::EmptyRoster);
            }
            MatchStatus::Locked
        }
        MatchStatus::Completed | MatchStatus::Void => return Err(RosterError::InvalidState),
    };
    Ok(roster.status)
}

/// Fill the first empty roster slot with `team_id`. A team already in a slot cannot join again.
pub fn join_roster_slot(roster: &mut MatchRoster, team_id: TeamId) -> Result<(), RosterError> {
    ensure_mutable(roster)?;
    if roster.roster_a == Some(team_id) || roster.roster_b == Some(team_id) {
        return Err(RosterError::InvalidState);
    }
    if roster.roster_a.is_none() {
        roster.roster_a = Some(team_id);
    } else if roster.roster_b.is_none() {
        roster.roster_b = Some(team_id);
    } else {
        return Err(RosterError::RosterSlotsFull);
    }
    Ok(())
}

/// Record the winning side of a locked match.
pub fn record_result(roster: &mut MatchRoster, winning_side: Side) -> Result<(), RosterError> {
    if roster.status != MatchStatus::Locked {
        return Err(RosterError::InvalidState);
    }
    roster.winner = Some(winning_side);
    roster.status = MatchStatus::Completed;
    Ok(())
}

/// Void the match. Allowed from every state but `Void`; the assignment is kept.
pub fn void_match(roster: &mut MatchRoster) -> Result<(), RosterError> {
    if roster.status == MatchStatus::Void {
        return Err(RosterError::InvalidState);
    }
    roster.winner = None;
    roster.status = MatchStatus::Void;
    Ok(())
}
