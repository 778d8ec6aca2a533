//! Configuration read once from the environment

use crate::error::{Result, ServerError};
use std::env;
use std::str::FromStr;

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub cache_lifetime_secs: u64,
    pub max_pages_per_day: u64,
    pub max_tokens: u32,
    pub temperature: f32,
    pub model: String,
    pub completion_base_url: String,
    pub api_key: String,
}

impl Config {
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_CACHE_LIFETIME_SECS: u64 = 24 * 60 * 60;
    pub const DEFAULT_MAX_PAGES_PER_DAY: u64 = 100;
    pub const DEFAULT_MAX_TOKENS: u32 = 2048;
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    pub const DEFAULT_MODEL: &'static str = "gpt-3.5-turbo-instruct";
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    /// Parse configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Parse configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ServerError::Config("OPENAI_API_KEY is not set".to_string()))?;

        let temperature: f32 = parse_var(&lookup, "TEMPERATURE", Self::DEFAULT_TEMPERATURE)?;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ServerError::Config(format!(
                "TEMPERATURE must be between 0 and 2, got {}",
                temperature
            )));
        }

        Ok(Self {
            port: parse_var(&lookup, "PORT", Self::DEFAULT_PORT)?,
            cache_lifetime_secs: parse_var(
                &lookup,
                "CACHE_LIFETIME",
                Self::DEFAULT_CACHE_LIFETIME_SECS,
            )?,
            max_pages_per_day: parse_var(
                &lookup,
                "MAX_PAGES_PER_DAY",
                Self::DEFAULT_MAX_PAGES_PER_DAY,
            )?,
            max_tokens: parse_var(&lookup, "MAX_TOKENS", Self::DEFAULT_MAX_TOKENS)?,
            temperature,
            model: lookup("COMPLETION_MODEL").unwrap_or_else(|| Self::DEFAULT_MODEL.to_string()),
            completion_base_url: lookup("COMPLETION_BASE_URL")
                .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
            api_key,
        })
    }
}

/// Read `name`, falling back to `default` when unset. A value that is set
/// but does not parse is an error.
fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| {
            ServerError::Config(format!("{} has an invalid value: {:?}", name, raw))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cache_lifetime_secs, 86400);
        assert_eq!(config.max_pages_per_day, 100);
        assert_eq!(config.max_tokens, 2048);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.model, "gpt-3.5-turbo-instruct");
        assert_eq!(config.completion_base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("PORT", "9000"),
            ("CACHE_LIFETIME", "3600"),
            ("MAX_PAGES_PER_DAY", " 5 "),
            ("MAX_TOKENS", "512"),
            ("TEMPERATURE", "0.2"),
            ("COMPLETION_MODEL", "local-model"),
            ("COMPLETION_BASE_URL", "http://localhost:11434/v1"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.cache_lifetime_secs, 3600);
        assert_eq!(config.max_pages_per_day, 5);
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.model, "local-model");
        assert_eq!(config.completion_base_url, "http://localhost:11434/v1");
    }

    #[test]
    fn test_missing_api_key() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));

        let err = config_from(&[("OPENAI_API_KEY", "  ")]).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let err = config_from(&[("OPENAI_API_KEY", "sk-test"), ("MAX_PAGES_PER_DAY", "lots")])
            .unwrap_err();
        assert!(err.to_string().contains("MAX_PAGES_PER_DAY"));
    }

    #[test]
    fn test_temperature_out_of_range() {
        let err = config_from(&[("OPENAI_API_KEY", "sk-test"), ("TEMPERATURE", "3.5")])
            .unwrap_err();
        assert!(err.to_string().contains("TEMPERATURE"));
    }
}
