//! League: the in-memory aggregate of teams, participants and matches.

use crate::models::match_roster::{MatchId, MatchRoster, RosterError, DEFAULT_SPORT};
use crate::models::participant::{Participant, ParticipantId};
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a league.
pub type LeagueId = Uuid;

/// Everything one organizer manages: teams, free agents, and the matches between them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,
    pub teams: Vec<Team>,
    /// All participants, rostered or free agents, in registration order.
    pub participants: Vec<Participant>,
    pub matches: Vec<MatchRoster>,
}

impl Default for League {
    fn default() -> Self {
        Self::new()
    }
}

impl League {
    /// Empty league with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            teams: Vec::new(),
            participants: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Register a team without a declared sport. Names must be unique (case-insensitive).
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<TeamId, RosterError> {
        self.add_team_for_sport(name, None)
    }

    /// Register a team that only plays matches of `sport`. A blank sport counts as undeclared.
    pub fn add_team_for_sport(
        &mut self,
        name: impl Into<String>,
        sport: Option<&str>,
    ) -> Result<TeamId, RosterError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::InvalidName);
        }
        if self.teams.iter().any(|t| t.name.eq_ignore_ascii_case(name)) {
            return Err(RosterError::DuplicateTeamName);
        }
        let mut team = Team::new(name);
        team.sport = declared_sport(sport).map(str::to_string);
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Register a participant, optionally on a team roster (free agent otherwise).
    pub fn add_participant(
        &mut self,
        name: impl Into<String>,
        skill_rating: u32,
        team_id: Option<TeamId>,
    ) -> Result<ParticipantId, RosterError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::InvalidName);
        }
        let participant = match team_id {
            Some(team_id) => {
                let team = self
                    .get_team_mut(team_id)
                    .ok_or(RosterError::TeamNotFound(team_id))?;
                let p = Participant::on_team(name, skill_rating, team_id);
                team.add_player(p.id);
                p
            }
            None => Participant::new(name, skill_rating),
        };
        let id = participant.id;
        self.participants.push(participant);
        Ok(id)
    }

    /// Create an unlocked match. Either roster slot may be left open for a team to join later;
    /// the same team cannot fill both.
    pub fn create_match(
        &mut self,
        roster_a: Option<TeamId>,
        roster_b: Option<TeamId>,
    ) -> Result<MatchId, RosterError> {
        self.create_match_for_sport(roster_a, roster_b, None)
    }

    /// [`create_match`](Self::create_match) with an explicit sport.
    ///
    /// Without one, the match takes the sport of the first slotted team that declares one,
    /// else soccer. Every slotted team with a declared sport must play the match's sport.
    pub fn create_match_for_sport(
        &mut self,
        roster_a: Option<TeamId>,
        roster_b: Option<TeamId>,
        sport: Option<&str>,
    ) -> Result<MatchId, RosterError> {
        if roster_a.is_some() && roster_a == roster_b {
            return Err(RosterError::InvalidState);
        }
        let mut teams = Vec::new();
        for team_id in roster_a.iter().chain(roster_b.iter()) {
            let team = self
                .get_team(*team_id)
                .ok_or(RosterError::TeamNotFound(*team_id))?;
            teams.push(team);
        }
        let sport = declared_sport(sport)
            .or_else(|| teams.iter().find_map(|t| t.sport.as_deref()))
            .unwrap_or(DEFAULT_SPORT)
            .to_string();
        for team in &teams {
            check_sport(team, &sport)?;
        }
        let mut m = MatchRoster::new(roster_a, roster_b);
        m.sport = sport;
        let id = m.id;
        self.matches.push(m);
        Ok(id)
    }

    /// Case-insensitive lookup by team name.
    pub fn find_team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Team by id.
    pub fn get_team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn get_team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    /// Participant by id.
    pub fn get_participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn get_participant_mut(&mut self, id: ParticipantId) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| p.id == id)
    }

    /// Match by id, or `MatchNotFound`.
    pub fn get_match(&self, id: MatchId) -> Result<&MatchRoster, RosterError> {
        self.matches
            .iter()
            .find(|m| m.id == id)
            .ok_or(RosterError::MatchNotFound(id))
    }

    /// Mutable match by id, or `MatchNotFound`.
    pub fn get_match_mut(&mut self, id: MatchId) -> Result<&mut MatchRoster, RosterError> {
        self.matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(RosterError::MatchNotFound(id))
    }

    /// Participants on a team's roster, in join order.
    pub fn team_members(&self, team_id: TeamId) -> Vec<Participant> {
        self.participants
            .iter()
            .filter(|p| p.team_id == Some(team_id))
            .cloned()
            .collect()
    }

    /// Balancing pool for a match: members of both roster slots, or every
    /// participant in the league when neither slot yields anyone.
    pub fn pool_for(&self, match_id: MatchId) -> Result<Vec<Participant>, RosterError> {
        let m = self.get_match(match_id)?;
        let mut pool: Vec<Participant> = m
            .roster_a
            .iter()
            .chain(m.roster_b.iter())
            .flat_map(|team_id| self.team_members(*team_id))
            .collect();
        if pool.is_empty() {
            pool = self.participants.clone();
        }
        Ok(pool)
    }
}

fn declared_sport(sport: Option<&str>) -> Option<&str> {
    sport.map(str::trim).filter(|s| !s.is_empty())
}

/// A team with a declared sport may only fill a slot of a match of that sport.
pub(crate) fn check_sport(team: &Team, match_sport: &str) -> Result<(), RosterError> {
    let found = team.sport_or(match_sport);
    if found.eq_ignore_ascii_case(match_sport) {
        Ok(())
    } else {
        Err(RosterError::SportMismatch {
            expected: match_sport.to_string(),
            found: found.to_string(),
        })
    }
}
