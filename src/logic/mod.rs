//! Match organizing logic: skill partitioning, roster state transitions, league operations.

mod import;
mod league;
mod partition;
mod roster;

pub use import::import_roster_csv;
pub use league::{
    assign_participant, balance_match, join_match, submit_result, toggle_match_lock,
    void_league_match, SideNames,
};
pub use partition::{
    balance, exact_balance, greedy_balance, random_split, random_split_with, skill_difference,
    BalancePath, Split, EXACT_BALANCE_MAX_POOL,
};
pub use roster::{
    assign_one, join_roster_slot, rebalance, rebalance_with, record_result, toggle_lock,
    void_match, RebalanceMode,
};
