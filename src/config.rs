//! Configuration file structures for the tracker.
//!
//! Configuration is a YAML file with environment variable overrides. Any
//! value can be overridden with a `GROUPER_`-prefixed variable using `__` as
//! the section separator.
//!
//! # Configuration File Format
//!
//! ```yaml
//! game:
//!   # Marker that identifies a share text as a submission
//!   name: "Connections"
//!   # Link posted with each new-round announcement
//!   url: "https://www.nytimes.com/games/connections"
//!
//! schedule:
//!   # Local time of day the pre-deadline warning fires
//!   warning_hour: 23
//!   warning_minute: 0
//!   # Seconds between scheduler ticks
//!   tick_seconds: 15
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export GROUPER_GAME__NAME="Connections"
//! export GROUPER_SCHEDULE__WARNING_HOUR="22"
//! ```

use anyhow::ensure;
use chrono::NaiveTime;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Root configuration for the tracker.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Puzzle game settings
    #[serde(default)]
    pub game: Game,
    /// Daily schedule settings
    #[serde(default)]
    pub schedule: Schedule,
}

/// Settings describing the tracked puzzle game.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Game {
    /// Marker that identifies a share text as a submission, and the name
    /// echoed in replies.
    pub name: String,
    /// Link posted with each new-round announcement.
    pub url: String,
}

impl Default for Game {
    fn default() -> Self {
        Game {
            name: "Connections".to_owned(),
            url: "https://www.nytimes.com/games/connections".to_owned(),
        }
    }
}

/// Settings for the daily scheduler.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Schedule {
    /// Local hour of the pre-deadline warning.
    pub warning_hour: u32,
    /// Local minute of the pre-deadline warning.
    pub warning_minute: u32,
    /// Seconds between scheduler ticks.
    pub tick_seconds: u64,
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule {
            warning_hour: 23,
            warning_minute: 0,
            tick_seconds: 15,
        }
    }
}

impl Schedule {
    /// The warning instant as a time of day.
    ///
    /// The fields are range-checked by [`Config::load`], so the fallback is
    /// never taken for a loaded configuration.
    pub fn warning_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.warning_hour, self.warning_minute, 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl Config {
    /// Loads the configuration from a YAML file with environment overrides.
    ///
    /// Missing files are not an error: every field has a default, so an
    /// empty or absent file yields the default configuration. Out-of-range
    /// schedule values are rejected.
    pub fn load(path: &str) -> Result<Self, anyhow::Error> {
        let config: Config = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("GROUPER_").split("__"))
            .extract()?;

        ensure!(
            config.schedule.warning_hour < 24 && config.schedule.warning_minute < 60,
            "invalid warning time {}:{}",
            config.schedule.warning_hour,
            config.schedule.warning_minute
        );
        ensure!(config.schedule.tick_seconds > 0, "tick_seconds must be positive");

        Ok(config)
    }
}
