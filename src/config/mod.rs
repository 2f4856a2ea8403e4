//! Service configuration
//!
//! Database and environment settings, read from environment variables
//! (optionally loaded from a `.env` file by `main`).

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::EnvironmentConfig;

use std::str::FromStr;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Read `key` through `lookup` and parse it, falling back to `default`
/// when the variable is unset or blank.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            })
        }
        _ => Ok(default),
    }
}

/// Read a boolean flag. Accepts true/false, 1/0, yes/no, on/off.
pub(crate) fn flag_or<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid {
                key,
                value: raw,
                reason: "expected a boolean".to_string(),
            }),
        },
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_or_default_and_value() {
        let lookup = lookup_from(&[("PORT", "8080"), ("BLANK", "  ")]);
        assert_eq!(parse_or(&lookup, "PORT", 3000u16), Ok(8080));
        assert_eq!(parse_or(&lookup, "MISSING", 3000u16), Ok(3000));
        assert_eq!(parse_or(&lookup, "BLANK", 3000u16), Ok(3000));
    }

    #[test]
    fn test_parse_or_invalid() {
        let lookup = lookup_from(&[("PORT", "eighty")]);
        let err = parse_or(&lookup, "PORT", 3000u16).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn test_flag_or() {
        let lookup = lookup_from(&[("A", "off"), ("B", "YES"), ("C", "maybe")]);
        assert_eq!(flag_or(&lookup, "A", true), Ok(false));
        assert_eq!(flag_or(&lookup, "B", false), Ok(true));
        assert_eq!(flag_or(&lookup, "D", true), Ok(true));
        assert!(flag_or(&lookup, "C", true).is_err());
    }
}
