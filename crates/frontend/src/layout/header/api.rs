//! Loads the deployment's header configuration from the static server.

use contracts::navigation::HeaderConfig;
use gloo_net::http::Request;

const CONFIG_URL: &str = "/api/header-config";

/// Fetch and validate the served configuration
pub async fn fetch_header_config() -> Result<HeaderConfig, String> {
    let response = Request::get(CONFIG_URL)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("{} returned HTTP {}", CONFIG_URL, response.status()));
    }
    let config: HeaderConfig = response.json().await.map_err(|e| e.to_string())?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}
