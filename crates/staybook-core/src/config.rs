use std::env::VarError;
use std::path::Path;

use crate::app_config::{AppConfig, Environment};
use crate::offers::EmptyPricingPolicy;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load configuration for a caller that already names the document path.
///
/// `db_path` stands in for `STAYBOOK_DB_PATH`, so it also satisfies the
/// production requirement for an explicit document source. With `None` this
/// is [`load_app_config`].
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_for_document(db_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    let db_path = db_path.map(|path| path.display().to_string());
    build_app_config(with_db_path(|key| std::env::var(key), db_path))
}

/// Wrap `lookup` so `STAYBOOK_DB_PATH` resolves to `db_path` when one is given.
fn with_db_path<F>(
    lookup: F,
    db_path: Option<String>,
) -> impl Fn(&str) -> Result<String, VarError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    move |key| match db_path.as_ref() {
        Some(path) if key == "STAYBOOK_DB_PATH" => Ok(path.clone()),
        _ => lookup(key),
    }
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("STAYBOOK_ENV", "development"))?;

    let bind_addr = or_default("STAYBOOK_BIND_ADDR", "0.0.0.0:3001")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("STAYBOOK_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("STAYBOOK_LOG_LEVEL", "info");

    let explicit_path = lookup("STAYBOOK_DB_PATH").ok();
    let db_url = lookup("STAYBOOK_DB_URL")
        .ok()
        .filter(|url| !url.trim().is_empty());

    // Production must name its document source instead of trusting the cwd.
    if env == Environment::Production && explicit_path.is_none() && db_url.is_none() {
        return Err(ConfigError::MissingEnvVar("STAYBOOK_DB_PATH".to_string()));
    }
    let db_path = PathBuf::from(explicit_path.unwrap_or_else(|| "./booking-db.json".to_string()));

    let remote_timeout_secs = or_default("STAYBOOK_REMOTE_TIMEOUT_SECS", "10")
        .parse::<u64>()
        .map_err(|e| invalid("STAYBOOK_REMOTE_TIMEOUT_SECS", e.to_string()))?;
    let user_agent = or_default("STAYBOOK_USER_AGENT", "staybook/0.1 (hotel-query)");

    let empty_pricing = or_default("STAYBOOK_EMPTY_PRICING", "skip")
        .parse::<EmptyPricingPolicy>()
        .map_err(|reason| invalid("STAYBOOK_EMPTY_PRICING", reason))?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        db_path,
        db_url,
        remote_timeout_secs,
        user_agent,
        empty_pricing,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STAYBOOK_ENV".to_string(),
            reason: format!("expected development, test or production; got '{other}'"),
        }),
    }
}
