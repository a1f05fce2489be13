use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for proof submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The proof file does not exist.
    #[error("proof file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    /// The proof file exists but could not be read.
    #[error("failed to read proof file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Host, port and path do not form a valid URL.
    #[error("invalid endpoint url {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The server could not be reached or the transfer failed.
    #[error("request error: {0}")]
    Connection(#[from] reqwest::Error),
    /// The server answered with a body that is not JSON.
    #[error("server responded with status {status} and a non-JSON body: {body:?}")]
    InvalidResponse {
        status: StatusCode,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}
