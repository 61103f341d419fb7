//! Configuration model loaded from external sources.

use chrono::FixedOffset;
use serde::Deserialize;

use crate::query::{
    DEFAULT_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE, PlannerConfig, StoreCapabilities,
};

#[derive(Clone, Debug, Deserialize)]
/// Application configuration shared across services.
pub struct AppConfig {
    pub database_url: String,
    /// Fixed UTC offset, in hours, anchoring date-range day boundaries.
    #[serde(default)]
    pub timezone_offset_hours: i32,
    #[serde(default = "default_per_page")]
    pub default_per_page: usize,
    #[serde(default = "max_per_page")]
    pub max_per_page: usize,
}

fn default_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn max_per_page() -> usize {
    MAX_ITEMS_PER_PAGE
}

impl AppConfig {
    /// Loads configuration from a YAML file, overridable through `ERP_*`
    /// environment variables.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("ERP"))
            .build()?
            .try_deserialize()
    }

    /// Planner settings derived from this configuration. An out-of-range
    /// offset degrades to UTC rather than failing startup.
    pub fn planner_config(&self) -> PlannerConfig {
        let tz_offset = FixedOffset::east_opt(self.timezone_offset_hours * 3600)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"));
        PlannerConfig {
            tz_offset,
            capabilities: StoreCapabilities::default(),
            default_per_page: self.default_per_page.max(1),
            max_per_page: self.max_per_page.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planner_config_degrades_bad_offset_to_utc() {
        let config = AppConfig {
            database_url: "erp.db".to_string(),
            timezone_offset_hours: 99,
            default_per_page: 10,
            max_per_page: 100,
        };
        assert_eq!(config.planner_config().tz_offset.local_minus_utc(), 0);
    }

    #[test]
    fn planner_config_keeps_valid_offset() {
        let config = AppConfig {
            database_url: "erp.db".to_string(),
            timezone_offset_hours: -5,
            default_per_page: 25,
            max_per_page: 50,
        };
        let planner = config.planner_config();
        assert_eq!(planner.tz_offset.local_minus_utc(), -5 * 3600);
        assert_eq!(planner.default_per_page, 25);
        assert_eq!(planner.max_per_page, 50);
    }
}
