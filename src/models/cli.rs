use clap::Parser;

/// Download verified contract sources from Etherscan
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The contract's address.
    pub address: String,
}
