// ABOUTME: Error types with structured exit codes for CLI
// ABOUTME: Separates HTTP status failures from transport, parse, and render errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status} on {endpoint}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),

    #[error("PDF conversion error: {0}")]
    Conversion(String),

    #[error("Invalid page id: {0:?}")]
    InvalidPageId(String),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 2,
            Error::Network(_) => 3,
            Error::Api { .. } => 4,
            Error::Parse(_) => 5,
            Error::Filesystem(_) => 6,
            Error::Conversion(_) => 7,
            Error::InvalidPageId(_) => 8,
        }
    }

    /// True when the server answered with a non-2xx status.
    pub fn is_http_status(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
