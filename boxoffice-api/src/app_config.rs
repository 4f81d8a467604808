use boxoffice_core::venue::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use boxoffice_core::{CoreResult, Venue};
use boxoffice_engine::DEFAULT_HOLD_TIMEOUT_MS;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub venue: VenueConfig,
    pub holds: HoldConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VenueConfig {
    pub rows: i32,
    pub columns: i32,
}

impl VenueConfig {
    pub fn build(&self) -> CoreResult<Venue> {
        Venue::new(self.rows, self.columns)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HoldConfig {
    pub timeout_ms: i64,
}

/// Longest hold the service accepts: one day.
pub const MAX_HOLD_TIMEOUT_MS: i64 = 24 * 60 * 60 * 1_000;

impl HoldConfig {
    /// `None` unless `timeout_ms` is in `1..=MAX_HOLD_TIMEOUT_MS`.
    pub fn timeout(&self) -> Option<chrono::Duration> {
        (1..=MAX_HOLD_TIMEOUT_MS)
            .contains(&self.timeout_ms)
            .then(|| chrono::Duration::milliseconds(self.timeout_ms))
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `BOXOFFICE_HOLDS__TIMEOUT_MS=5000`
            .add_source(config::Environment::with_prefix("BOXOFFICE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("server.port", 8080_i64)?
            .set_default("venue.rows", DEFAULT_ROWS as i64)?
            .set_default("venue.columns", DEFAULT_COLUMNS as i64)?
            .set_default("holds.timeout_ms", DEFAULT_HOLD_TIMEOUT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = Config::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.venue.build().unwrap().number_of_seats(), 1500);
        assert_eq!(config.holds.timeout(), Some(chrono::Duration::seconds(2)));
    }

    #[test]
    fn test_overrides_and_bad_venue() {
        let config: Config = Config::defaults()
            .unwrap()
            .set_override("venue.rows", 0_i64)
            .unwrap()
            .set_override("holds.timeout_ms", 300_i64)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(config.venue.build().is_err());
        assert_eq!(config.holds.timeout(), Some(chrono::Duration::milliseconds(300)));
    }

    #[test]
    fn test_hold_timeout_bounds() {
        let timeout = |timeout_ms| HoldConfig { timeout_ms }.timeout();

        assert_eq!(timeout(0), None);
        assert_eq!(timeout(-5), None);
        assert_eq!(timeout(MAX_HOLD_TIMEOUT_MS + 1), None);
        assert_eq!(timeout(i64::MAX), None);
        assert_eq!(timeout(MAX_HOLD_TIMEOUT_MS), Some(chrono::Duration::days(1)));
    }
}
