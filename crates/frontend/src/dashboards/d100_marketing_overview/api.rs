use contracts::dashboards::d100_marketing_overview::MarketingOverviewResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the combined three-channel overview for a period
pub async fn get_overview(from: &str, to: &str) -> Result<MarketingOverviewResponse, String> {
    let url = api_url(&format!("/api/d100/overview?from={}&to={}", from, to));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: MarketingOverviewResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
