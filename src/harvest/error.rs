//! Error types for the Harvest client layer.
//!
//! Uses miette for diagnostic output and thiserror for derive macros.
//! Semantic absence (a lookup that matches nothing) is not an error and is
//! modeled as `Ok(None)` by the client methods instead.

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced by the Harvest API client.
#[derive(Error, Diagnostic, Debug)]
pub enum HarvestError {
    #[error("Missing Harvest credential: {name}")]
    #[diagnostic(
        code(harvest_mcp::client::missing_credential),
        help("Set the {name} environment variable before starting the server.")
    )]
    MissingCredential { name: &'static str },

    #[error("Invalid client configuration: {message}")]
    #[diagnostic(code(harvest_mcp::client::config))]
    Config { message: String },

    #[error("Failed to reach the Harvest API")]
    #[diagnostic(
        code(harvest_mcp::client::transport),
        help("Check network connectivity and the configured base URL.")
    )]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("Harvest API error ({status}): {message}")]
    #[diagnostic(code(harvest_mcp::client::api_error))]
    Api { status: u16, message: String },

    #[error("Invalid response from Harvest API: {message}")]
    #[diagnostic(code(harvest_mcp::client::invalid_response))]
    InvalidResponse { message: String },
}

impl From<reqwest::Error> for HarvestError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            HarvestError::InvalidResponse {
                message: e.to_string(),
            }
        } else {
            HarvestError::Transport { source: e }
        }
    }
}

/// Result type for Harvest client operations.
pub type HarvestResult<T> = Result<T, HarvestError>;
