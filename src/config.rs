use crate::date_window::parse_date_key;
use crate::errors::ConfigError;
use chrono::NaiveDate;
use std::{env, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_PATH: &str = "data/habits.json";
pub const DEFAULT_APP_START: &str = "2025-11-09";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    /// Base URL of the habits API the calendar view reads from and writes to.
    pub api_url: String,
    /// First day that can be tracked.
    pub app_start: NaiveDate,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let data_path = lookup("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let api_url = lookup("HABITS_API_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| format!("http://127.0.0.1:{port}/api"));

        let start = lookup("APP_START_DATE").unwrap_or_else(|| DEFAULT_APP_START.to_string());
        let app_start =
            parse_date_key(start.trim()).ok_or_else(|| ConfigError::InvalidStartDate(start.clone()))?;

        Ok(Self {
            port,
            data_path,
            api_url,
            app_start,
        })
    }
}
