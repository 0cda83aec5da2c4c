/*!
 * Error types for the clinic-content crate.
 *
 * The fetch layer reports precise causes through `FetchError`; the public
 * `fetch_*` operations collapse every one of them into an absent result after
 * logging. `AppError` is used by the application layer and the CLI.
 */

use thiserror::Error;

/// Errors that can occur while talking to the content API
#[derive(Error, Debug)]
pub enum FetchError {
    /// The configured base URL could not be combined with the endpoint path
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {0} ms")]
    Timeout(u128),

    /// Error when sending the request or reading the response fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Non-2xx status returned by the API
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Response body, if any
        message: String,
    },

    /// The body could not be interpreted as the expected document
    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

impl From<url::ParseError> for FetchError {
    fn from(error: url::ParseError) -> Self {
        Self::InvalidUrl(error.to_string())
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error reading or writing a file
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the content API
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
