//! Environment settings
//!
//! Server address, runtime environment name, log level and CORS origins.

use tracing::Level;

use super::{parse_or, ConfigError};

/// Environment configuration
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub log_level: Level,
    /// Allowed CORS origins; empty means permissive.
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: Level::INFO,
            cors_origins: Vec::new(),
        }
    }
}

impl EnvironmentConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            environment: lookup("ENVIRONMENT")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.environment),
            host: lookup("HOST")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            log_level: parse_or(&lookup, "LOG_LEVEL", defaults.log_level)?,
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// `host:port` to bind
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = EnvironmentConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.environment, "development");
        assert!(!config.is_production());
        assert_eq!(config.server_url(), "127.0.0.1:3000");
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_values_from_lookup() {
        let config = EnvironmentConfig::from_lookup(|key| match key {
            "ENVIRONMENT" => Some("production".to_string()),
            "HOST" => Some("0.0.0.0".to_string()),
            "PORT" => Some("8501".to_string()),
            "LOG_LEVEL" => Some("debug".to_string()),
            "CORS_ORIGINS" => Some("http://a.test, ,http://b.test".to_string()),
            _ => None,
        })
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.server_url(), "0.0.0.0:8501");
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_invalid_log_level() {
        let result = EnvironmentConfig::from_lookup(|key| {
            (key == "LOG_LEVEL").then(|| "loud".to_string())
        });
        assert!(result.is_err());
    }
}
