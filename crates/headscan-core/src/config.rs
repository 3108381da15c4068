use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_USER_AGENT: &str = "headscan/0.1 (heading-extractor)";
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 16;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment is valid. Decoupled
/// from the process environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("HEADSCAN_ENV", "development"));

    let bind_addr: SocketAddr = parse_as(
        "HEADSCAN_BIND_ADDR",
        &or_default("HEADSCAN_BIND_ADDR", DEFAULT_BIND_ADDR),
    )?;
    let log_level = or_default("HEADSCAN_LOG_LEVEL", "info");

    let request_timeout_secs: u64 = parse_as(
        "HEADSCAN_REQUEST_TIMEOUT_SECS",
        &or_default(
            "HEADSCAN_REQUEST_TIMEOUT_SECS",
            &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
        ),
    )?;
    let user_agent = or_default("HEADSCAN_USER_AGENT", DEFAULT_USER_AGENT);
    let max_concurrent_fetches: usize = parse_as(
        "HEADSCAN_MAX_CONCURRENT_FETCHES",
        &or_default(
            "HEADSCAN_MAX_CONCURRENT_FETCHES",
            &DEFAULT_MAX_CONCURRENT_FETCHES.to_string(),
        ),
    )?;
    let max_body_bytes: usize = parse_as(
        "HEADSCAN_MAX_BODY_BYTES",
        &or_default("HEADSCAN_MAX_BODY_BYTES", &DEFAULT_MAX_BODY_BYTES.to_string()),
    )?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        request_timeout_secs,
        user_agent,
        max_concurrent_fetches,
        max_body_bytes,
    })
}

fn parse_as<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
