use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can feed a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
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

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let database_url = lookup("DATABASE_URL").ok().filter(|s| !s.trim().is_empty());
    let env = parse_environment(&or_default("AUTOREEL_ENV", "development"));

    let bind_addr = parse_addr("AUTOREEL_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("AUTOREEL_LOG_LEVEL", "info");

    let api_url = or_default("AUTOREEL_API_URL", DEFAULT_API_URL);
    if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
        return Err(invalid(
            "AUTOREEL_API_URL",
            format!("'{api_url}' must start with http:// or https://"),
        ));
    }
    let api_token = lookup("AUTOREEL_API_TOKEN")
        .ok()
        .filter(|s| !s.trim().is_empty());

    let api_keys = split_list(&or_default("AUTOREEL_API_KEYS", ""));
    let cors_origins = split_list(&or_default("AUTOREEL_CORS_ORIGINS", "http://localhost:3000"));

    let rate_limit_per_minute = parse_usize("AUTOREEL_RATE_LIMIT_PER_MINUTE", "100")?;
    if rate_limit_per_minute == 0 {
        return Err(invalid(
            "AUTOREEL_RATE_LIMIT_PER_MINUTE",
            "must be greater than zero".to_string(),
        ));
    }
    let request_timeout_secs = parse_u64("AUTOREEL_REQUEST_TIMEOUT_SECS", "30")?;
    let log_retention_days = parse_u32("AUTOREEL_LOG_RETENTION_DAYS", "30")?;
    let seed_path = PathBuf::from(or_default("AUTOREEL_SEED_PATH", "./config/seed.yaml"));

    let db_max_connections = parse_u32("AUTOREEL_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("AUTOREEL_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("AUTOREEL_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        api_url,
        api_token,
        api_keys,
        cors_origins,
        rate_limit_per_minute,
        request_timeout_secs,
        log_retention_days,
        seed_path,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
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

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
