use std::str::FromStr;

use nemitzam_core::session::DEFAULT_ADMIN_SECRET;

/// Process settings read from the environment (and `.env` via `dotenvy`).
///
/// | Variable                | Default                   |
/// |-------------------------|---------------------------|
/// | `HOST`                  | `0.0.0.0`                 |
/// | `PORT`                  | `3000`                    |
/// | `CORS_ORIGINS`          | `http://localhost:5173`   |
/// | `REQUEST_TIMEOUT_SECS`  | `30`                      |
/// | `SHUTDOWN_TIMEOUT_SECS` | `30`                      |
/// | `ADMIN_PASSWORD`        | the built-in admin secret |
/// | `DATABASE_URL`          | unset: in-memory gateway  |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated in `CORS_ORIGINS`; blanks are dropped.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// How long shutdown waits for the relay and heartbeat.
    pub shutdown_timeout_secs: u64,
    /// Shared secret that opens an admin session.
    pub admin_password: String,
    pub database_url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("{var} must be a valid {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; `lookup` returns `None` for unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let text = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: text("HOST", "0.0.0.0"),
            port: parse_var(&lookup, "PORT", 3000, "port number")?,
            cors_origins: parse_origins(&text("CORS_ORIGINS", "http://localhost:5173")),
            request_timeout_secs: parse_var(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                30,
                "number of seconds",
            )?,
            shutdown_timeout_secs: parse_var(
                &lookup,
                "SHUTDOWN_TIMEOUT_SECS",
                30,
                "number of seconds",
            )?,
            admin_password: text("ADMIN_PASSWORD", DEFAULT_ADMIN_SECRET),
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError {
            var,
            expected,
            value,
        }),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
