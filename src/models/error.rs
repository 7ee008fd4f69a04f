use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("ETHERSCAN_API_KEY is not set")]
    MissingApiKey,

    #[error("Failed to read .env: {0}")]
    EnvFile(#[source] dotenvy::Error),

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Malformed explorer response: {0}")]
    MalformedResponse(String),

    #[error("Explorer error: {message}: {result}")]
    Api { message: String, result: String },

    #[error("No contract found at {address}")]
    NotFound { address: String },

    #[error("Contract at {address} is not verified")]
    Unverified { address: String },

    #[error("Malformed source bundle: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// The request URL carries the API key, so it is dropped from transport errors.
impl From<reqwest::Error> for DownloadError {
    fn from(e: reqwest::Error) -> Self {
        DownloadError::Transport(e.without_url())
    }
}
