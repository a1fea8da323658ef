//! Data structures for match organizing: participants, teams, matches, league state.

mod league;
mod match_roster;
mod participant;
mod team;

pub(crate) use league::check_sport;
pub use league::{League, LeagueId};
pub use match_roster::{
    Assignment, MatchId, MatchRoster, MatchStatus, RosterError, Side, DEFAULT_SPORT,
};
pub use participant::{total_skill, Participant, ParticipantId, ParticipantRecord};
pub use team::{Team, TeamId};
