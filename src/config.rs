// ABOUTME: Credential loading from .env and process environment
// ABOUTME: Fails fast before any network call when a variable is missing

use crate::{Error, Result};
use std::env;

pub const BASE_URL_VAR: &str = "BASE_URL";
pub const EMAIL_VAR: &str = "EMAIL";
pub const API_TOKEN_VAR: &str = "API_TOKEN";

#[derive(Clone)]
pub struct Config {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

// The token stays out of debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Loads `.env` from the working directory (if any), then reads the
    /// process environment. Existing variables are never overwritten.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(Error::Config(format!("Failed to read .env: {}", e))),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        match (read(BASE_URL_VAR), read(EMAIL_VAR), read(API_TOKEN_VAR)) {
            (Some(base_url), Some(email), Some(api_token)) => Ok(Config {
                base_url: base_url.trim().trim_end_matches('/').to_string(),
                email,
                api_token,
            }),
            _ => Err(Error::Config(format!(
                "{}, {}, and {} must be set in the environment or a .env file.",
                BASE_URL_VAR, EMAIL_VAR, API_TOKEN_VAR
            ))),
        }
    }
}
