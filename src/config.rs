//! Client Configuration
//!
//! Build-time settings for the API origin and console log level.

use std::str::FromStr;

use log::LevelFilter;

pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8080";

/// Local storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Server origin without trailing slash, e.g. `http://localhost:8080`
    pub api_origin: &'static str,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Read `LOST_FOUND_API_ORIGIN` and `LOST_FOUND_LOG_LEVEL` baked in at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("LOST_FOUND_API_ORIGIN"),
            option_env!("LOST_FOUND_LOG_LEVEL"),
        )
    }

    fn from_values(origin: Option<&'static str>, level: Option<&str>) -> Self {
        let api_origin = origin
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .unwrap_or(DEFAULT_API_ORIGIN)
            .trim_end_matches('/');
        let log_level = level
            .and_then(|l| LevelFilter::from_str(l.trim()).ok())
            .unwrap_or(LevelFilter::Info);
        Self { api_origin, log_level }
    }

    /// Absolute URL for an `/api/...` path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_origin, path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_origin, "http://localhost:8080");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = AppConfig::from_values(Some("https://lost.example.ac.kr/"), Some("debug"));
        assert_eq!(config.api_origin, "https://lost.example.ac.kr");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.endpoint("/api/items"), "https://lost.example.ac.kr/api/items");
    }

    #[test]
    fn test_bad_level_falls_back() {
        let config = AppConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config.api_origin, DEFAULT_API_ORIGIN);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
