use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize)]
pub struct EtherscanResponse<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    pub result: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContractSourceCode {
    #[serde(rename = "SourceCode")]
    pub source_code: String,
    #[serde(rename = "ABI", default)]
    pub abi: String,
    #[serde(rename = "ContractName", default)]
    pub contract_name: String,
    #[serde(rename = "CompilerVersion", default)]
    pub compiler_version: String,
}

/// Multi-file compiler input as embedded in `SourceCode`.
#[derive(Debug, Deserialize)]
pub struct StandardJsonInput {
    pub sources: BTreeMap<String, SourceFile>,
    pub settings: Settings,
}

#[derive(Debug, Deserialize)]
pub struct SourceFile {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub remappings: Vec<String>,
}
