//! Roster import from CSV text with header `name,skill_rating[,team]`.
//!
//! Rows are validated before anything is added: one bad row rejects the whole file.
//! Unknown team names are registered on the fly; an empty `team` cell means free agent.

use crate::models::{League, RosterError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    skill_rating: u32,
    #[serde(default)]
    team: Option<String>,
}

fn invalid(line: u64, reason: impl Into<String>) -> RosterError {
    let reason = reason.into();
    log::warn!("Rejected roster import at line {}: {}", line, reason);
    RosterError::InvalidImport { line, reason }
}

fn parse_rows(text: &str) -> Result<Vec<RosterRow>, RosterError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| invalid(1, e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            let line = e.position().map_or(0, |p| p.line());
            invalid(line, e.to_string())
        })?;
        let line = record.position().map_or(0, |p| p.line());
        let row: RosterRow = record
            .deserialize(Some(&headers))
            .map_err(|e| invalid(line, e.to_string()))?;
        if row.name.is_empty() {
            return Err(invalid(line, "empty name"));
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Add every row of `text` to the league. Returns the number of participants added.
pub fn import_roster_csv(league: &mut League, text: &str) -> Result<usize, RosterError> {
    let rows = parse_rows(text)?;
    let count = rows.len();
    for row in rows {
        let team_id = match row.team.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            Some(team_name) => {
                let existing = league.find_team_by_name(team_name).map(|t| t.id);
                match existing {
                    Some(id) => Some(id),
                    None => Some(league.add_team(team_name)?),
                }
            }
            None => None,
        };
        league.add_participant(row.name, row.skill_rating, team_id)?;
    }
    log::info!("Imported {} participant(s) into league {}", count, league.id);
    Ok(count)
}
