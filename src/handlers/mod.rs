mod download;

pub use download::{download_contract, written_message};
