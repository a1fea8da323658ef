//! REST API over an in-memory store of leagues.
//!
//! Every handler takes the store's write lock, touches the league's activity time and
//! answers with JSON. Domain errors become `400 {"error": ...}`, unknown leagues `404`.

use crate::logic::{
    assign_participant, balance_match, import_roster_csv, join_match, submit_result,
    toggle_match_lock, void_league_match, RebalanceMode,
};
use crate::models::{League, LeagueId, MatchId, ParticipantId, Side, TeamId};
use actix_web::{
    get, post,
    web::{self, Data, Json, Path},
    HttpResponse, Responder,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-league entry: league data + last activity time (for auto-cleanup).
pub struct LeagueEntry {
    pub league: League,
    pub last_activity: Instant,
}

impl LeagueEntry {
    /// Wrap a league, stamped as active now.
    pub fn new(league: League) -> Self {
        Self {
            league,
            last_activity: Instant::now(),
        }
    }
}

/// Every live league, keyed by id.
pub type LeagueStore = RwLock<HashMap<LeagueId, LeagueEntry>>;

/// Shared app state handed to every handler.
pub type AppState = Data<LeagueStore>;

/// Empty shared store for `App::app_data`.
pub fn new_state() -> AppState {
    Data::new(RwLock::new(HashMap::new()))
}

/// Drop leagues idle for at least `timeout`. Returns how many were removed.
pub fn cleanup_inactive(store: &LeagueStore, timeout: Duration) -> usize {
    let mut g = match store.write() {
        Ok(guard) => guard,
        Err(_) => return 0,
    };
    let before = g.len();
    g.retain(|_, entry| entry.last_activity.elapsed() < timeout);
    before - g.len()
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
    #[serde(default)]
    sport: Option<String>,
}

#[derive(Deserialize)]
struct AddParticipantBody {
    name: String,
    skill_rating: u32,
    #[serde(default)]
    team_id: Option<TeamId>,
}

#[derive(Deserialize)]
struct CreateMatchBody {
    #[serde(default)]
    roster_a: Option<TeamId>,
    #[serde(default)]
    roster_b: Option<TeamId>,
    #[serde(default)]
    sport: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    scheduled_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct JoinMatchBody {
    team_id: TeamId,
}

/// `team_side: null` (or omitted) removes the participant from the match.
#[derive(Deserialize)]
struct AssignBody {
    participant_id: ParticipantId,
    #[serde(default)]
    team_side: Option<Side>,
}

#[derive(Deserialize)]
struct ResultBody {
    winning_side: Side,
}

/// Path segment: league id (e.g. /api/leagues/{id})
#[derive(Deserialize)]
struct LeaguePath {
    id: LeagueId,
}

/// Path segments: league id and match id (e.g. /api/leagues/{id}/matches/{match_id})
#[derive(Deserialize)]
struct LeagueMatchPath {
    id: LeagueId,
    match_id: MatchId,
}

fn bad_request(e: impl ToString) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Run `f` against one league, refreshing its activity time.
fn with_league<F>(state: &AppState, id: LeagueId, f: F) -> HttpResponse
where
    F: FnOnce(&mut League) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.league)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No league" })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "match-roster-web",
    })
}

/// Create an empty league (client keeps the id for subsequent requests).
#[post("/api/leagues")]
async fn api_create_league(state: AppState) -> HttpResponse {
    let league = League::new();
    let body = HttpResponse::Ok().json(&league);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(league.id, LeagueEntry::new(league));
    body
}

#[get("/api/leagues/{id}")]
async fn api_get_league(state: AppState, path: Path<LeaguePath>) -> HttpResponse {
    with_league(&state, path.id, |league| HttpResponse::Ok().json(&*league))
}

#[post("/api/leagues/{id}/teams")]
async fn api_add_team(state: AppState, path: Path<LeaguePath>, body: Json<AddTeamBody>) -> HttpResponse {
    with_league(&state, path.id, |league| {
        match league.add_team_for_sport(body.name.as_str(), body.sport.as_deref()) {
            Ok(_) => HttpResponse::Ok().json(&*league),
            Err(e) => bad_request(e),
        }
    })
}

#[post("/api/leagues/{id}/participants")]
async fn api_add_participant(
    state: AppState,
    path: Path<LeaguePath>,
    body: Json<AddParticipantBody>,
) -> HttpResponse {
    let body = body.into_inner();
    with_league(&state, path.id, |league| {
        match league.add_participant(body.name, body.skill_rating, body.team_id) {
            Ok(_) => HttpResponse::Ok().json(&*league),
            Err(e) => bad_request(e),
        }
    })
}

/// Bulk add participants from CSV (`name,skill_rating[,team]`).
#[post("/api/leagues/{id}/participants/import")]
async fn api_import_participants(state: AppState, path: Path<LeaguePath>, body: String) -> HttpResponse {
    with_league(&state, path.id, |league| match import_roster_csv(league, &body) {
        Ok(_) => HttpResponse::Ok().json(&*league),
        Err(e) => bad_request(e),
    })
}

#[post("/api/leagues/{id}/matches")]
async fn api_create_match(
    state: AppState,
    path: Path<LeaguePath>,
    body: Json<CreateMatchBody>,
) -> HttpResponse {
    let body = body.into_inner();
    with_league(&state, path.id, |league| {
        let match_id = match league.create_match_for_sport(
            body.roster_a,
            body.roster_b,
            body.sport.as_deref(),
        ) {
            Ok(id) => id,
            Err(e) => return bad_request(e),
        };
        if let Ok(m) = league.get_match_mut(match_id) {
            m.location = body.location.filter(|l| !l.trim().is_empty());
            m.scheduled_at = body.scheduled_at;
        }
        HttpResponse::Ok().json(&*league)
    })
}

/// Open challenge: a team takes the first free roster slot.
#[post("/api/leagues/{id}/matches/{match_id}/join")]
async fn api_join_match(
    state: AppState,
    path: Path<LeagueMatchPath>,
    body: Json<JoinMatchBody>,
) -> HttpResponse {
    with_league(&state, path.id, |league| match join_match(league, path.match_id, body.team_id) {
        Ok(()) => HttpResponse::Ok().json(&*league),
        Err(e) => bad_request(e),
    })
}

#[post("/api/leagues/{id}/matches/{match_id}/auto_balance")]
async fn api_auto_balance(state: AppState, path: Path<LeagueMatchPath>) -> HttpResponse {
    with_league(&state, path.id, |league| {
        match balance_match(league, path.match_id, RebalanceMode::Balanced) {
            Ok(sides) => HttpResponse::Ok().json(sides),
            Err(e) => bad_request(e),
        }
    })
}

#[post("/api/leagues/{id}/matches/{match_id}/shuffle")]
async fn api_shuffle(state: AppState, path: Path<LeagueMatchPath>) -> HttpResponse {
    with_league(&state, path.id, |league| {
        match balance_match(league, path.match_id, RebalanceMode::Shuffled) {
            Ok(sides) => HttpResponse::Ok().json(sides),
            Err(e) => bad_request(e),
        }
    })
}

#[post("/api/leagues/{id}/matches/{match_id}/assign")]
async fn api_assign(state: AppState, path: Path<LeagueMatchPath>, body: Json<AssignBody>) -> HttpResponse {
    with_league(&state, path.id, |league| {
        match assign_participant(league, path.match_id, body.participant_id, body.team_side) {
            Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
            Err(e) => bad_request(e),
        }
    })
}

#[post("/api/leagues/{id}/matches/{match_id}/toggle_lock")]
async fn api_toggle_lock(state: AppState, path: Path<LeagueMatchPath>) -> HttpResponse {
    with_league(&state, path.id, |league| match toggle_match_lock(league, path.match_id) {
        Ok(status) => HttpResponse::Ok().json(serde_json::json!({ "status": status.as_str() })),
        Err(e) => bad_request(e),
    })
}

#[post("/api/leagues/{id}/matches/{match_id}/result")]
async fn api_submit_result(
    state: AppState,
    path: Path<LeagueMatchPath>,
    body: Json<ResultBody>,
) -> HttpResponse {
    with_league(&state, path.id, |league| {
        match submit_result(league, path.match_id, body.winning_side) {
            Ok(()) => HttpResponse::Ok().json(&*league),
            Err(e) => bad_request(e),
        }
    })
}

#[post("/api/leagues/{id}/matches/{match_id}/void")]
async fn api_void_match(state: AppState, path: Path<LeagueMatchPath>) -> HttpResponse {
    with_league(&state, path.id, |league| match void_league_match(league, path.match_id) {
        Ok(()) => HttpResponse::Ok().json(&*league),
        Err(e) => bad_request(e),
    })
}

/// Register every API route. The caller supplies the [`AppState`] via `app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_create_league)
        .service(api_get_league)
        .service(api_add_team)
        .service(api_add_participant)
        .service(api_import_participants)
        .service(api_create_match)
        .service(api_join_match)
        .service(api_auto_balance)
        .service(api_shuffle)
        .service(api_assign)
        .service(api_toggle_lock)
        .service(api_submit_result)
        .service(api_void_match);
}
