// src/config.rs
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

pub const DEFAULT_PAGE_SIZE: usize = 9;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// SQLite file holding the listings table.
    pub db_path: String,
    /// Schema applied on start-up.
    pub schema_path: String,
    pub max_workers: usize,
    /// Cards per listings page.
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "homepulse.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            max_workers: 8,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Reads `HOMEPULSE_*` variables, keeping defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("HOMEPULSE_ADDR") {
            cfg.addr = parse_value("HOMEPULSE_ADDR", v)?;
        }
        if let Some(v) = lookup("HOMEPULSE_DB") {
            cfg.db_path = v;
        }
        if let Some(v) = lookup("HOMEPULSE_SCHEMA") {
            cfg.schema_path = v;
        }
        if let Some(v) = lookup("HOMEPULSE_WORKERS") {
            cfg.max_workers = parse_positive("HOMEPULSE_WORKERS", v)?;
        }
        if let Some(v) = lookup("HOMEPULSE_PAGE_SIZE") {
            cfg.page_size = parse_positive("HOMEPULSE_PAGE_SIZE", v)?;
        }

        Ok(cfg)
    }
}

fn parse_value<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}

fn parse_positive(key: &'static str, value: String) -> Result<usize, ConfigError> {
    let n: usize = parse_value(key, value.clone())?;
    if n == 0 {
        return Err(ConfigError::Invalid {
            key,
            value,
            reason: "must be greater than zero".into(),
        });
    }
    Ok(n)
}
