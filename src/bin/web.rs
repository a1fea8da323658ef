//! Single binary web server: JSON API for leagues, rosters and matches.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT,
//! LEAGUE_TTL_HOURS, CLEANUP_INTERVAL_MINUTES.

use actix_web::{App, HttpServer};
use match_roster_web::web::{cleanup_inactive, configure, new_state};
use match_roster_web::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = new_state();

    // Background task: periodically remove leagues nobody has touched within the TTL
    let state_cleanup = state.clone();
    let timeout = config.inactivity_timeout;
    let every = config.cleanup_interval;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(every);
        loop {
            interval.tick().await;
            let removed = cleanup_inactive(&state_cleanup, timeout);
            if removed > 0 {
                log::info!(
                    "Cleaned up {} inactive league(s) (no activity for {}h)",
                    removed,
                    timeout.as_secs() / 3600
                );
            }
        }
    });

    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
