use crate::models::DownloadError;

pub const DEFAULT_API_URL: &str = "https://api.etherscan.io/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
}

impl Config {
    pub fn new(api_key: Option<String>, api_url: Option<String>) -> Result<Self, DownloadError> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or(DownloadError::MissingApiKey)?;
        let api_url = api_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self { api_key, api_url })
    }

    /// Reads `ETHERSCAN_API_KEY` and `ETHERSCAN_API_URL`, loading `.env` first if present.
    pub fn from_env() -> Result<Self, DownloadError> {
        load_env_file(dotenvy::dotenv())?;

        Self::new(
            std::env::var("ETHERSCAN_API_KEY").ok(),
            std::env::var("ETHERSCAN_API_URL").ok(),
        )
    }
}

/// A missing `.env` is fine; one that fails to parse is not.
fn load_env_file<T>(result: dotenvy::Result<T>) -> Result<(), DownloadError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(DownloadError::EnvFile(e)),
    }
}
