//! Team match organizer: library with models, roster-balancing logic and the HTTP API.

pub mod config;
pub mod logic;
pub mod models;
pub mod web;

pub use config::ServerConfig;
pub use logic::{
    assign_one, assign_participant, balance, balance_match, exact_balance, greedy_balance,
    import_roster_csv, join_match, random_split, rebalance, record_result, skill_difference,
    submit_result, toggle_lock, toggle_match_lock, void_league_match, void_match, BalancePath,
    RebalanceMode, SideNames, Split,
};
pub use models::{
    Assignment, League, LeagueId, MatchId, MatchRoster, MatchStatus, Participant, ParticipantId,
    RosterError, Side, Team, TeamId, DEFAULT_SPORT,
};
