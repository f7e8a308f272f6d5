use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

pub const API_KEY_VAR: &str = "FESTIVAL_MAP_API_KEY";
pub const SCHEDULE_VAR: &str = "FESTIVAL_MAP_SCHEDULE";
pub const VENUES_VAR: &str = "FESTIVAL_MAP_VENUES";
pub const HTTP_ADDR_VAR: &str = "FESTIVAL_MAP_HTTP_ADDR";
pub const LOG_VAR: &str = "FESTIVAL_MAP_LOG";

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Key handed to the map provider. Absent means the client falls back to its own.
    pub maps_api_key: Option<String>,
    /// Schedule file; the bundled dataset is used when unset.
    pub schedule_path: Option<PathBuf>,
    /// Venue table file; the built-in table is used when unset.
    pub venues_path: Option<PathBuf>,
    pub http_addr: SocketAddr,
    pub log_level: Level,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { name, value } => {
                write!(f, "invalid value '{value}' for {name}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Reads the process environment, after loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let http_addr = parse_var(
            HTTP_ADDR_VAR,
            non_empty(HTTP_ADDR_VAR).unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string()),
        )?;
        let log_level = parse_var(
            LOG_VAR,
            non_empty(LOG_VAR).unwrap_or_else(|| "info".to_string()),
        )?;

        Ok(Self {
            maps_api_key: non_empty(API_KEY_VAR),
            schedule_path: non_empty(SCHEDULE_VAR).map(PathBuf::from),
            venues_path: non_empty(VENUES_VAR).map(PathBuf::from),
            http_addr,
            log_level,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
