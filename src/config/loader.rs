//! Load server config from environment variables.

use crate::config::types::{IdStrategy, ServerConfig, UpdatePolicy};
use crate::error::ConfigError;
use std::str::FromStr;

pub const ENV_BIND_ADDR: &str = "MENU_BIND_ADDR";
pub const ENV_ID_STRATEGY: &str = "MENU_ID_STRATEGY";
pub const ENV_UPDATE_POLICY: &str = "MENU_UPDATE_POLICY";
pub const ENV_SEED: &str = "MENU_SEED";
pub const ENV_BODY_LIMIT: &str = "MENU_BODY_LIMIT";

/// Read config from the process environment. Unset variables take defaults.
pub fn load_from_env() -> Result<ServerConfig, ConfigError> {
    load_with(|key| std::env::var(key).ok())
}

/// Read config through `lookup`, which returns the raw value for a variable name.
pub fn load_with<F>(lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ServerConfig::default();
    if let Some(v) = lookup(ENV_BIND_ADDR) {
        config.bind_addr = parse(ENV_BIND_ADDR, &v, "host:port")?;
    }
    if let Some(v) = lookup(ENV_ID_STRATEGY) {
        config.id_strategy = IdStrategy::from_str(&v).map_err(|_| ConfigError::Invalid {
            var: ENV_ID_STRATEGY,
            value: v.clone(),
            expected: "length, monotonic or uuid",
        })?;
    }
    if let Some(v) = lookup(ENV_UPDATE_POLICY) {
        config.update_policy = UpdatePolicy::from_str(&v).map_err(|_| ConfigError::Invalid {
            var: ENV_UPDATE_POLICY,
            value: v.clone(),
            expected: "falsy or presence",
        })?;
    }
    if let Some(v) = lookup(ENV_SEED) {
        config.seed = parse_bool(ENV_SEED, &v)?;
    }
    if let Some(v) = lookup(ENV_BODY_LIMIT) {
        config.body_limit = parse(ENV_BODY_LIMIT, &v, "a byte count")?;
    }
    tracing::debug!(?config, "loaded config");
    Ok(config)
}

fn parse<T: FromStr>(var: &'static str, value: &str, expected: &'static str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
        expected,
    })
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            expected: "a boolean",
        }),
    }
}
