//! Server configuration from environment variables.
//!
//! `HOST` (default 0.0.0.0), `PORT` (default 8080), `LEAGUE_TTL_HOURS` (default 12),
//! `CLEANUP_INTERVAL_MINUTES` (default 30). Missing, unparseable or overflowing values use
//! the default.

use std::time::Duration;

/// Listen address and league expiry settings for the web binary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Leagues not touched for this long are dropped.
    pub inactivity_timeout: Duration,
    pub cleanup_interval: Duration,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

const DEFAULT_TTL_HOURS: u64 = 12;
const DEFAULT_CLEANUP_MINUTES: u64 = 30;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            inactivity_timeout: Duration::from_secs(DEFAULT_TTL_HOURS * 3600),
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_MINUTES * 60),
        }
    }
}

impl ServerConfig {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (process env in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(default_host);
        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or_else(default_port);
        let ttl_secs = lookup("LEAGUE_TTL_HOURS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .and_then(|h| h.checked_mul(3600))
            .unwrap_or(DEFAULT_TTL_HOURS * 3600);
        let cleanup_secs = lookup("CLEANUP_INTERVAL_MINUTES")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|m| *m > 0)
            .and_then(|m| m.checked_mul(60))
            .unwrap_or(DEFAULT_CLEANUP_MINUTES * 60);
        Self {
            host,
            port,
            inactivity_timeout: Duration::from_secs(ttl_secs),
            cleanup_interval: Duration::from_secs(cleanup_secs),
        }
    }
}
