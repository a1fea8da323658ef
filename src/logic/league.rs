//! League-level match operations: resolve the pool, then delegate to the roster operations.

use crate::logic::roster::{self, RebalanceMode};
use crate::models::{
    check_sport, League, MatchId, MatchStatus, ParticipantId, RosterError, Side, TeamId,
};
use serde::{Deserialize, Serialize};

/// Names on each side after a balance or shuffle.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SideNames {
    pub team_a: Vec<String>,
    pub team_b: Vec<String>,
}

/// Rebuild a match's assignment from its pool (both rosters, else every participant).
pub fn balance_match(
    league: &mut League,
    match_id: MatchId,
    mode: RebalanceMode,
) -> Result<SideNames, RosterError> {
    let pool = league.pool_for(match_id)?;
    let m = league.get_match_mut(match_id)?;
    let (side_a, side_b) = roster::rebalance(m, &pool, mode)?;
    Ok(SideNames {
        team_a: side_a.into_iter().map(|p| p.name).collect(),
        team_b: side_b.into_iter().map(|p| p.name).collect(),
    })
}

/// Manually place (or with `None`, remove) one registered participant.
pub fn assign_participant(
    league: &mut League,
    match_id: MatchId,
    participant_id: ParticipantId,
    side: Option<Side>,
) -> Result<(), RosterError> {
    if league.get_participant(participant_id).is_none() {
        return Err(RosterError::ParticipantNotFound(participant_id));
    }
    let m = league.get_match_mut(match_id)?;
    roster::assign_one(m, participant_id, side)
}

/// Lock or unlock a match; returns the new status.
pub fn toggle_match_lock(league: &mut League, match_id: MatchId) -> Result<MatchStatus, RosterError> {
    let m = league.get_match_mut(match_id)?;
    let status = roster::toggle_lock(m)?;
    log::info!("Match {} is now {}", match_id, status.as_str());
    Ok(status)
}

/// An open challenge: `team_id` takes the first free roster slot.
///
/// Lock and lifecycle state are checked first, then the team's sport against the match's.
pub fn join_match(league: &mut League, match_id: MatchId, team_id: TeamId) -> Result<(), RosterError> {
    let team = league
        .get_team(team_id)
        .cloned()
        .ok_or(RosterError::TeamNotFound(team_id))?;
    let m = league.get_match_mut(match_id)?;
    roster::ensure_mutable(m)?;
    check_sport(&team, &m.sport)?;
    roster::join_roster_slot(m, team_id)?;
    log::info!("Team {} joined match {}", team.name, match_id);
    Ok(())
}

/// Record the result of a locked match and update win/loss records.
///
/// Everyone assigned to `winning_side` gets a win, every other assigned participant a loss.
/// The team in the matching roster slot gets a match won, the team in the other slot a match lost.
pub fn submit_result(league: &mut League, match_id: MatchId, winning_side: Side) -> Result<(), RosterError> {
    let m = league.get_match_mut(match_id)?;
    roster::record_result(m, winning_side)?;
    let winners = m.side_members(winning_side);
    let losers = m.side_members(winning_side.other());
    let winning_team = m.team_for_side(winning_side);
    let losing_team = m.team_for_side(winning_side.other());

    for id in &winners {
        if let Some(p) = league.get_participant_mut(*id) {
            p.add_win();
        }
    }
    for id in &losers {
        if let Some(p) = league.get_participant_mut(*id) {
            p.add_loss();
        }
    }
    if let Some(team) = winning_team.and_then(|id| league.get_team_mut(id)) {
        team.matches_won += 1;
    }
    if let Some(team) = losing_team.and_then(|id| league.get_team_mut(id)) {
        team.matches_lost += 1;
    }
    log::info!(
        "Match {} completed: side {:?} won ({} winners, {} losers)",
        match_id,
        winning_side,
        winners.len(),
        losers.len()
    );
    Ok(())
}

/// Void a match; recorded wins and losses stay as they are.
pub fn void_league_match(league: &mut League, match_id: MatchId) -> Result<(), RosterError> {
    let m = league.get_match_mut(match_id)?;
    roster::void_match(m)?;
    log::info!("Match {} voided", match_id);
    Ok(())
}
