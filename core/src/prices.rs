use serde_json::Value;

use crate::client::{take_path, UpstreamClient};
use crate::config::{PAGE_SIZE, PRODUCT_CODE};
use crate::error::{Upstream, UpstreamError};
use crate::window::TimeWindow;


pub fn tariff_code(region: &str) -> String {
    format!("E-1R-{PRODUCT_CODE}-{region}")
}

pub fn unit_rates_url(base: &str, region: &str) -> String {
    format!(
        "{}/products/{PRODUCT_CODE}/electricity-tariffs/{}/standard-unit-rates/",
        base.trim_end_matches('/'),
        tariff_code(region)
    )
}

/// Agile unit rates for `region` over `window`, as the raw `results` list.
pub async fn fetch_prices(
    client: &UpstreamClient,
    region: &str,
    window: &TimeWindow,
) -> Result<Value, UpstreamError> {
    let url = unit_rates_url(&client.config.octopus_base, region);
    let (period_from, period_to) = window.octopus_bounds();

    tracing::debug!(%url, %period_from, %period_to, "fetching unit rates");

    let body = client.get_json(
        Upstream::Octopus,
        &url,
        &[
            ("period_from", period_from),
            ("period_to", period_to),
            ("page_size", PAGE_SIZE.to_string()),
        ],
    ).await?;

    Ok(take_path(body, &["results"]))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;
    use chrono::{TimeZone, Utc};
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    const RATES_PATH: &str =
        "/products/AGILE-24-10-01/electricity-tariffs/E-1R-AGILE-24-10-01-C/standard-unit-rates/";

    fn client_for(server: &MockServer) -> UpstreamClient {
        UpstreamClient::new(UpstreamConfig::with_base_urls(server.base_url(), server.base_url()))
    }

    fn window() -> TimeWindow {
        TimeWindow::default_at(Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn tariff_code_embeds_region_verbatim() {
        assert_eq!(tariff_code("C"), "E-1R-AGILE-24-10-01-C");
        assert_eq!(tariff_code("m"), "E-1R-AGILE-24-10-01-m");
        assert_eq!(tariff_code(""), "E-1R-AGILE-24-10-01-");
    }

    #[test]
    fn url_path_contains_tariff() {
        let url = unit_rates_url("https://api.octopus.energy/v1/", "J");
        assert_eq!(
            url,
            "https://api.octopus.energy/v1/products/AGILE-24-10-01/electricity-tariffs/E-1R-AGILE-24-10-01-J/standard-unit-rates/"
        );
    }

    #[tokio::test]
    async fn results_pass_through_unchanged() {
        let server = MockServer::start_async().await;
        let results = json!([
            {"value_exc_vat": 14.1, "value_inc_vat": 14.805, "valid_from": "2024-10-01T22:30:00Z", "valid_to": "2024-10-01T23:00:00Z", "payment_method": null},
            {"value_inc_vat": -0.5, "unknown_field": {"nested": true}}
        ]);
        let mock = server.mock_async(|when, then| {
            when.method(GET)
                .path(RATES_PATH)
                .query_param("period_from", "2024-09-30T12:00:00Z")
                .query_param("period_to", "2024-10-03T12:00:00Z")
                .query_param("page_size", "2500");
            then.status(200).json_body(json!({"count": 2, "next": null, "results": results}));
        }).await;

        let prices = fetch_prices(&client_for(&server), "C", &window()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(prices, results);
    }

    #[tokio::test]
    async fn missing_results_is_empty_list() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path(RATES_PATH);
            then.status(200).json_body(json!({"detail": "nothing here"}));
        }).await;

        let prices = fetch_prices(&client_for(&server), "C", &window()).await.unwrap();
        assert_eq!(prices, json!([]));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path(RATES_PATH);
            then.status(503).body("maintenance");
        }).await;

        let err = fetch_prices(&client_for(&server), "C", &window()).await.unwrap_err();
        assert_eq!(err.kind(), "HTTPError");
        assert_eq!(err.api(), Upstream::Octopus);
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn invalid_json_is_a_decode_error() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path(RATES_PATH);
            then.status(200).body("<html>not json</html>");
        }).await;

        let err = fetch_prices(&client_for(&server), "C", &window()).await.unwrap_err();
        assert_eq!(err.kind(), "JSONDecodeError");
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(GET).path(RATES_PATH);
            then.status(200).delay(Duration::from_millis(1500)).json_body(json!({"results": []}));
        }).await;

        let config = UpstreamConfig::with_base_urls(server.base_url(), server.base_url())
            .with_timeout(Duration::from_millis(200));
        let err = fetch_prices(&UpstreamClient::new(config), "C", &window()).await.unwrap_err();
        assert_eq!(err.kind(), "Timeout");
    }
}
