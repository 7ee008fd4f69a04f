mod cli;
mod config;
mod error;
mod etherscan;

pub use cli::Cli;
pub use config::Config;
pub use error::DownloadError;
pub use etherscan::{ContractSourceCode, EtherscanResponse, StandardJsonInput};
