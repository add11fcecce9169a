//! Environment-driven configuration.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PETMEAL_PORT` | `3000` |
//! | `PETMEAL_BIND` | `0.0.0.0` |
//! | `PETMEAL_CHANNEL_CAPACITY` | `32` |
//! | `PETMEAL_CORS_MAX_AGE_SECS` | `3600` |
//!
//! Unset variables fall back to their default (and say so in the log). A variable
//! that is set but doesn't parse is an error: the server refuses to start.

use std::{env, fmt::Display, net::IpAddr, str::FromStr, time::Duration};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: IpAddr,
    pub port: u16,
    /// Capacity of every actor's request channel.
    pub channel_capacity: usize,
    pub cors_max_age: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. `load` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let channel_capacity: usize = try_load(&lookup, "PETMEAL_CHANNEL_CAPACITY", "32")?;
        if channel_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                key: "PETMEAL_CHANNEL_CAPACITY".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            bind: try_load(&lookup, "PETMEAL_BIND", "0.0.0.0")?,
            port: try_load(&lookup, "PETMEAL_PORT", "3000")?,
            channel_capacity,
            cors_max_age: Duration::from_secs(try_load(&lookup, "PETMEAL_CORS_MAX_AGE_SECS", "3600")?),
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            channel_capacity: 32,
            cors_max_age: Duration::from_secs(3600),
        }
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::InvalidValue {
            key: key.to_string(),
            value,
            reason: e.to_string(),
        }
    })
}
