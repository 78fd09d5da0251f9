//! Runtime configuration for client apps.
//!
//! The remote collection endpoint and the owner identity are fixed for the
//! whole session; frontends resolve them once at startup from the
//! environment.

use crate::error::{Error, Result};
use crate::util::is_http_url;

/// Environment variable naming the API base URL.
pub const API_BASE_URL_VAR: &str = "CHORES_API_BASE_URL";
/// Environment variable naming the owner id.
pub const OWNER_ID_VAR: &str = "CHORES_OWNER_ID";

/// Session configuration: where the task collection lives and whose it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub owner_id: i64,
}

impl Config {
    /// Build a configuration from explicit values, validating both.
    pub fn new(api_base_url: impl Into<String>, owner_id: i64) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(&api_base_url.into())?,
            owner_id,
        })
    }

    /// Resolve configuration from `CHORES_API_BASE_URL` and `CHORES_OWNER_ID`.
    pub fn from_env() -> Result<Self> {
        let base_url = require_env(API_BASE_URL_VAR)?;
        let owner_raw = require_env(OWNER_ID_VAR)?;
        let owner_id = owner_raw.parse::<i64>().map_err(|_| {
            Error::InvalidInput(format!("{OWNER_ID_VAR} must be an integer, got '{owner_raw}'"))
        })?;
        Self::new(base_url, owner_id)
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(Error::InvalidInput(format!("{name} is required"))),
    }
}

/// Validate and normalize an API base URL (http(s) only, no trailing slash).
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::InvalidInput("API base URL must not be empty".to_string()));
    }
    if !is_http_url(&base) {
        return Err(Error::InvalidInput(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("example.com").is_err());
    }

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://api.example.com/").unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn config_new_validates_base_url() {
        let config = Config::new("https://api.example.com/", 7).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.owner_id, 7);
        assert!(Config::new("not-a-url", 7).is_err());
    }
}
