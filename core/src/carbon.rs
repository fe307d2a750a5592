use serde_json::Value;

use crate::client::{take_path, UpstreamClient};
use crate::config::CARBON_REGION_ID;
use crate::error::{Upstream, UpstreamError};
use crate::window::TimeWindow;


pub fn regional_intensity_url(base: &str, window: &TimeWindow) -> String {
    let (start, end) = window.carbon_bounds();
    format!(
        "{}/regional/intensity/{start}/{end}/regionid/{CARBON_REGION_ID}",
        base.trim_end_matches('/')
    )
}

/// Carbon intensity for the fixed grid region, as the raw `data.data` list.
pub async fn fetch_carbon(client: &UpstreamClient, window: &TimeWindow) -> Result<Value, UpstreamError> {
    let url = regional_intensity_url(&client.config.carbon_base, window);

    tracing::debug!(%url, "fetching carbon intensity");

    let body = client.get_json(Upstream::CarbonIntensity, &url, &[]).await?;

    Ok(take_path(body, &["data", "data"]))
}
