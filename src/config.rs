// src/config.rs
use crate::errors::{Result, VerifyError};
use std::fmt;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 1323;

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    /// Secret shared with Google, sent on every siteverify call.
    pub secret_key: String,
    pub port: u16,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("secret_key", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `RECAPTCHA_SECRET_KEY` is required and must not be blank. `PORT` falls back
    /// to [`DEFAULT_PORT`] when unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("RECAPTCHA_SECRET_KEY")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                VerifyError::Config("RECAPTCHA_SECRET_KEY is not set".to_string())
            })?;

        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw.trim().parse::<u16>().map_err(|_| {
                VerifyError::Config(format!("PORT must be a valid port number, got '{}'", raw))
            })?,
            _ => DEFAULT_PORT,
        };

        Ok(AppConfig { secret_key, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_port_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[("RECAPTCHA_SECRET_KEY", "abc")])).unwrap();
        assert_eq!(config.secret_key, "abc");
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_reads_custom_port() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("RECAPTCHA_SECRET_KEY", "abc"),
            ("PORT", " 8081 "),
        ]))
        .unwrap();
        assert_eq!(config.port, 8081);
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap_err();
        assert!(matches!(err, VerifyError::Config(_)));
        assert!(err.to_string().contains("RECAPTCHA_SECRET_KEY"));
    }

    #[test]
    fn test_blank_secret_is_an_error() {
        let result = AppConfig::from_lookup(lookup_from(&[("RECAPTCHA_SECRET_KEY", "   ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("RECAPTCHA_SECRET_KEY", "abc"),
            ("PORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("not-a-port"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AppConfig { secret_key: "super-secret".to_string(), port: 1 };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
