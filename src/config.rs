use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from compile-time environment variables
    /// (`build.rs` forwards the values found in `.env`).
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: environment
                .map(|env| env.trim().to_string())
                .filter(|env| !env.is_empty())
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|flag| flag.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert!(!config.is_production());
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let config = AppConfig::from_values(Some("https://api.example.com/ "), None, None);
        assert_eq!(config.base_url(), "https://api.example.com");
    }

    #[test]
    fn unparsable_logging_flag_keeps_default() {
        let config = AppConfig::from_values(None, Some("production"), Some("verbose"));
        assert!(config.is_logging_enabled());
        assert!(config.is_production());

        let quiet = AppConfig::from_values(None, None, Some("false"));
        assert_eq!(quiet.log_level(), log::Level::Warn);
    }
}
