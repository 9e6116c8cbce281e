use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use thiserror::Error;

use crate::common::SecretString;
use crate::domains::search::models::{DEFAULT_POST_LIMIT, MAX_POST_LIMIT};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_YELP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_FOURSQUARE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_INSTAGRAM_TIMEOUT_SECS: u64 = 25;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be set")]
    Missing { var: &'static str },

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Settings for a provider that authenticates with an API key.
#[derive(Debug, Clone)]
pub struct ApiProviderConfig {
    pub api_key: SecretString,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct InstagramConfig {
    /// Logged-in `sessionid` cookie; hashtag pages are often refused without it
    pub session_id: Option<SecretString>,
    pub post_limit: usize,
    pub timeout: Duration,
}

/// Application configuration loaded from environment variables.
///
/// A provider section is `None` when that provider is disabled.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub yelp: Option<ApiProviderConfig>,
    pub foursquare: Option<ApiProviderConfig>,
    pub instagram: Option<InstagramConfig>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let yelp = if vars.flag("YELP_ENABLED")? {
            Some(ApiProviderConfig {
                api_key: vars.required("YELP_API_KEY")?.into(),
                timeout: vars.timeout("YELP_TIMEOUT_SECS", DEFAULT_YELP_TIMEOUT_SECS)?,
            })
        } else {
            None
        };

        let foursquare = if vars.flag("FOURSQUARE_ENABLED")? {
            Some(ApiProviderConfig {
                api_key: vars.required("FOURSQUARE_API_KEY")?.into(),
                timeout: vars.timeout("FOURSQUARE_TIMEOUT_SECS", DEFAULT_FOURSQUARE_TIMEOUT_SECS)?,
            })
        } else {
            None
        };

        let instagram = if vars.flag("INSTAGRAM_ENABLED")? {
            Some(InstagramConfig {
                session_id: vars.get("INSTAGRAM_SESSION_ID").map(SecretString::from),
                post_limit: vars.post_limit("INSTAGRAM_POST_LIMIT")?,
                timeout: vars.timeout("INSTAGRAM_TIMEOUT_SECS", DEFAULT_INSTAGRAM_TIMEOUT_SECS)?,
            })
        } else {
            None
        };

        Ok(Self {
            host: vars.get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: match vars.get("PORT") {
                Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                    var: "PORT",
                    reason: format!("'{}' is not a valid port number", raw),
                })?,
                None => DEFAULT_PORT,
            },
            yelp,
            foursquare,
            instagram,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, var: &str) -> Option<String> {
        (self.0)(var)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, var: &'static str) -> Result<String, ConfigError> {
        self.get(var).ok_or(ConfigError::Missing { var })
    }

    /// Providers are on unless switched off.
    fn flag(&self, var: &'static str) -> Result<bool, ConfigError> {
        let Some(raw) = self.get(var) else {
            return Ok(true);
        };
        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid {
                var,
                reason: format!("'{}' is not a boolean", raw),
            }),
        }
    }

    fn timeout(&self, var: &'static str, default_secs: u64) -> Result<Duration, ConfigError> {
        let Some(raw) = self.get(var) else {
            return Ok(Duration::from_secs(default_secs));
        };
        match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(ConfigError::Invalid {
                var,
                reason: format!("'{}' is not a positive number of seconds", raw),
            }),
        }
    }

    fn post_limit(&self, var: &'static str) -> Result<usize, ConfigError> {
        let Some(raw) = self.get(var) else {
            return Ok(DEFAULT_POST_LIMIT);
        };
        let limit = raw.parse::<usize>().map_err(|_| ConfigError::Invalid {
            var,
            reason: format!("'{}' is not a number", raw),
        })?;
        Ok(limit.clamp(1, MAX_POST_LIMIT))
    }
}
