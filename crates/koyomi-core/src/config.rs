use std::str::FromStr;

use anyhow::Result;
use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub stats: StatsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// IANA timezone name used for every calendar-day decision.
    pub timezone: String,
}

impl CalendarConfig {
    /// ## Summary
    /// Resolves the configured timezone name to a `chrono_tz::Tz`.
    ///
    /// ## Errors
    /// Returns `CoreError::UnknownTimezone` if the name is not a known IANA
    /// timezone.
    pub fn timezone(&self) -> CoreResult<Tz> {
        Tz::from_str(&self.timezone)
            .map_err(|_e| CoreError::UnknownTimezone(self.timezone.clone()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    /// Length of the trailing activity window, in days.
    pub window_days: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("calendar.timezone", "UTC")?
            .set_default("stats.window_days", 7)?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
