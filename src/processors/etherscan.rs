use crate::models::{Config, ContractSourceCode, DownloadError, EtherscanResponse};
use reqwest::Client;
use serde_json::Value;
use tracing::info;

pub fn source_code_url(config: &Config, address: &str) -> String {
    format!(
        "{}?module=contract&action=getsourcecode&address={}&apikey={}",
        config.api_url, address, config.api_key
    )
}

pub async fn get_source_code(
    config: &Config,
    address: &str,
) -> Result<EtherscanResponse<Vec<ContractSourceCode>>, DownloadError> {
    let client = Client::new();
    let url = source_code_url(config, address);

    info!("Fetching source code for {} from {}", address, config.api_url);
    let body = client.get(&url).send().await?.text().await?;

    parse_response(&body)
}

pub fn parse_response(body: &str) -> Result<EtherscanResponse<Vec<ContractSourceCode>>, DownloadError> {
    let envelope: EtherscanResponse<Value> = serde_json::from_str(body)
        .map_err(|e| DownloadError::MalformedResponse(e.to_string()))?;

    // Etherscan reports errors ("Invalid API Key", rate limits) as a string result
    let result: Vec<ContractSourceCode> = match envelope.result {
        Value::Array(items) => serde_json::from_value(Value::Array(items))
            .map_err(|e| DownloadError::MalformedResponse(e.to_string()))?,
        Value::String(result) => {
            return Err(DownloadError::Api {
                message: envelope.message,
                result,
            })
        }
        other => {
            return Err(DownloadError::MalformedResponse(format!(
                "unexpected result: {}",
                other
            )))
        }
    };

    Ok(EtherscanResponse {
        status: envelope.status,
        message: envelope.message,
        result,
    })
}

pub fn first_contract(
    response: EtherscanResponse<Vec<ContractSourceCode>>,
    address: &str,
) -> Result<ContractSourceCode, DownloadError> {
    response
        .result
        .into_iter()
        .next()
        .ok_or_else(|| DownloadError::NotFound {
            address: address.to_string(),
        })
}
