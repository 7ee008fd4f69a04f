use crate::models::{Config, DownloadError};
use crate::processors::{first_contract, get_source_code, SourceFormat};
use crate::services::{write_flat, write_standard_json};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
pub struct Download {
    pub out_dir: PathBuf,
    pub format: SourceFormat,
    pub files: Vec<PathBuf>,
}

/// Fetches the verified source of `address` and writes it under `root/<address>`.
pub async fn download_contract(
    config: &Config,
    address: &str,
    root: &Path,
) -> Result<Download, DownloadError> {
    let response = get_source_code(config, address).await?;
    let contract = first_contract(response, address)?;

    let source_code = contract.source_code;
    if source_code.is_empty() {
        return Err(DownloadError::Unverified {
            address: address.to_string(),
        });
    }

    let format = SourceFormat::detect(&source_code);
    info!(
        "Contract {} ({}) is {} source",
        contract.contract_name, contract.compiler_version, format
    );

    let files = match format {
        SourceFormat::StandardJson => write_standard_json(&source_code, address, root)?,
        SourceFormat::Flat => vec![write_flat(&source_code, address, root)?],
    };

    Ok(Download {
        out_dir: root.join(address),
        format,
        files,
    })
}

pub fn written_message(out_dir: &Path) -> String {
    format!("Contracts written to {}", out_dir.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, routing::get, Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::fs;

    /// Serves `body` for any `getsourcecode` request carrying the expected key.
    async fn mock_explorer(body: Value) -> Config {
        let app = Router::new().route(
            "/api",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let body = body.clone();
                async move {
                    assert_eq!(params.get("module").map(String::as_str), Some("contract"));
                    assert_eq!(params.get("action").map(String::as_str), Some("getsourcecode"));
                    assert_eq!(params.get("apikey").map(String::as_str), Some("TESTKEY"));
                    Json(body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Config::new(Some("TESTKEY".into()), Some(format!("http://{}/api", addr))).unwrap()
    }

    #[tokio::test]
    async fn flat_contract_end_to_end() {
        let config = mock_explorer(json!({"result": [{"SourceCode": "contract C {}"}]})).await;
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("downloads");

        let download = download_contract(&config, "0xABC", &root).await.unwrap();

        assert_eq!(download.format, SourceFormat::Flat);
        assert_eq!(download.out_dir, root.join("0xABC"));
        assert_eq!(download.files, vec![root.join("0xABC").join("contract.sol")]);
        assert_eq!(
            fs::read_to_string(root.join("0xABC").join("contract.sol")).unwrap(),
            "contract C {}"
        );
    }

    #[tokio::test]
    async fn standard_json_end_to_end() {
        let source_code = format!(
            "{{{}}}",
            json!({
                "language": "Solidity",
                "sources": {
                    "contracts/Vault.sol": {"content": "contract Vault {}"},
                    "@openzeppelin/contracts/access/Ownable.sol": {"content": "contract Ownable {}"}
                },
                "settings": {"remappings": ["@openzeppelin/=node_modules/@openzeppelin/"]}
            })
        );
        let config = mock_explorer(json!({
            "status": "1",
            "message": "OK",
            "result": [{"SourceCode": source_code, "ContractName": "Vault", "ABI": "[]"}]
        }))
        .await;
        let dir = tempfile::tempdir().unwrap();

        let download = download_contract(&config, "0xDEF", dir.path()).await.unwrap();

        let out = dir.path().join("0xDEF");
        assert_eq!(download.format, SourceFormat::StandardJson);
        assert_eq!(download.files.len(), 3);
        assert_eq!(
            fs::read_to_string(out.join("contracts/Vault.sol")).unwrap(),
            "contract Vault {}"
        );
        assert_eq!(
            fs::read_to_string(out.join("@openzeppelin/contracts/access/Ownable.sol")).unwrap(),
            "contract Ownable {}"
        );
        assert_eq!(
            fs::read_to_string(out.join("remappings")).unwrap(),
            "@openzeppelin/=node_modules/@openzeppelin/"
        );
    }

    #[tokio::test]
    async fn empty_result_is_not_found() {
        let config = mock_explorer(json!({"status": "0", "message": "NOTOK", "result": []})).await;
        let dir = tempfile::tempdir().unwrap();

        let err = download_contract(&config, "0xABC", dir.path()).await.unwrap_err();

        assert!(matches!(err, DownloadError::NotFound { .. }));
        assert!(!dir.path().join("0xABC").exists());
    }

    #[tokio::test]
    async fn empty_source_is_unverified() {
        let config = mock_explorer(json!({
            "status": "1",
            "message": "OK",
            "result": [{"SourceCode": "", "ABI": "Contract source code not verified"}]
        }))
        .await;
        let dir = tempfile::tempdir().unwrap();

        let err = download_contract(&config, "0xABC", dir.path()).await.unwrap_err();

        assert!(matches!(err, DownloadError::Unverified { .. }));
    }

    #[tokio::test]
    async fn unreachable_explorer_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let config =
            Config::new(Some("SECRETKEY".into()), Some(format!("http://{}/api", addr))).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let err = download_contract(&config, "0xABC", dir.path()).await.unwrap_err();

        assert!(matches!(err, DownloadError::Transport(_)));
        let mut source: Option<&dyn std::error::Error> = Some(&err);
        while let Some(e) = source {
            assert!(!e.to_string().contains("SECRETKEY"), "key leaked: {}", e);
            source = e.source();
        }
    }

    #[test]
    fn message_names_output_directory() {
        assert_eq!(
            written_message(&Path::new("downloads").join("0xABC")),
            "Contracts written to downloads/0xABC"
        );
    }
}
