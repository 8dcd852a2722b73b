//! Runtime settings for the menu server.

use std::net::SocketAddr;
use std::str::FromStr;

/// How the store assigns `id` to newly created records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// `collection.len() + 1`. Reuses ids after a delete.
    #[default]
    Length,
    /// Per-collection counter that never goes backwards.
    Monotonic,
    /// Random v4 UUID.
    Uuid,
}

impl FromStr for IdStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(IdStrategy::Length),
            "monotonic" => Ok(IdStrategy::Monotonic),
            "uuid" => Ok(IdStrategy::Uuid),
            _ => Err(()),
        }
    }
}

/// How `updateDish` decides whether an argument replaces the stored value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Falsy values (`""`, `0`, `NaN`, null, omitted) keep the stored value.
    #[default]
    Falsy,
    /// Omitted keeps, explicit null clears, anything else is written.
    Presence,
}

impl FromStr for UpdatePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "falsy" => Ok(UpdatePolicy::Falsy),
            "presence" => Ok(UpdatePolicy::Presence),
            _ => Err(()),
        }
    }
}

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:4000";
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub id_strategy: IdStrategy,
    pub update_policy: UpdatePolicy,
    /// Load the built-in categories and dishes at startup.
    pub seed: bool,
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 4000)),
            id_strategy: IdStrategy::default(),
            update_policy: UpdatePolicy::default(),
            seed: true,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}
