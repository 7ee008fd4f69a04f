pub mod etherscan;
pub mod source_format;

pub use etherscan::{first_contract, get_source_code};
pub use source_format::SourceFormat;
