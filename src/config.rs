use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::database::seed;
use crate::error::{AppError, AppResult};
use crate::models::ActivityDirectory;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Server settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// JSON seed replacing the built-in activities.
    pub activities_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            activities_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| {
                    AppError::Config(format!("PORT must be a port number, got {raw:?}"))
                })?,
            None => defaults.port,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            activities_file: get("ACTIVITIES_FILE").map(PathBuf::from),
        })
    }

    pub fn socket_addr(&self, port: u16) -> AppResult<SocketAddr> {
        format!("{}:{}", self.host, port)
            .parse()
            .map_err(|_| {
                AppError::Config(format!(
                    "cannot parse {}:{} as an address",
                    self.host, port
                ))
            })
    }

    pub fn load_activities(&self) -> AppResult<ActivityDirectory> {
        match &self.activities_file {
            Some(path) => seed::load_activities_file(path),
            None => Ok(seed::default_activities()),
        }
    }
}
