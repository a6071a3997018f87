use serde_json::Value;
use url::Url;

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::models::Game;

pub async fn fetch_games(config: &ApiConfig) -> Result<Vec<Game>, AppError> {
    let client = reqwest::Client::new();
    let request = build_request(&client, config)?;

    tracing::debug!(url = %request.url(), "fetching game listing");

    let body = client
        .execute(request)
        .await?
        .error_for_status()?
        .text()
        .await?;

    parse_games(&body)
}

pub fn build_request(
    client: &reqwest::Client,
    config: &ApiConfig,
) -> Result<reqwest::Request, AppError> {
    let mut url = Url::parse(&config.base_url).map_err(|e| AppError::Internal(e.to_string()))?;
    url.query_pairs_mut().append_pair("sort-by", "alphabetical");

    let request = client
        .get(url)
        .header("x-rapidapi-key", &config.api_key)
        .header("x-rapidapi-host", &config.host)
        .build()?;
    Ok(request)
}

/// Decodes the listing body. The upstream answers some failures with a
/// `{"status": 0, "status_message": ...}` object instead of an array.
pub fn parse_games(body: &str) -> Result<Vec<Game>, AppError> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| AppError::UpstreamSchema(e.to_string()))?;

    match root {
        Value::Array(_) => serde_json::from_value(root)
            .map_err(|e| AppError::UpstreamSchema(format!("game entry: {e}"))),
        Value::Object(obj) => {
            let message = obj
                .get("status_message")
                .and_then(|v| v.as_str())
                .unwrap_or("listing response is not an array");
            Err(AppError::UpstreamSchema(message.to_string()))
        }
        _ => Err(AppError::UpstreamSchema(
            "listing response is not an array".to_string(),
        )),
    }
}
