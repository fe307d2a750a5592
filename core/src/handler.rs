use chrono::Utc;
use reqwest::{header::{self, HeaderName, HeaderValue}, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::carbon::fetch_carbon;
use crate::client::UpstreamClient;
use crate::config::DEFAULT_REGION;
use crate::error::UpstreamError;
use crate::prices::fetch_prices;
use crate::window::TimeWindow;


#[derive(Serialize, Debug, Clone)]
pub struct Snapshot {
    pub prices: Value,
    pub carbon: Value,
    pub region: String,
    pub timestamp: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct ErrorBody {
    pub error: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub traceback: String,
}

impl From<&UpstreamError> for ErrorBody {
    fn from(err: &UpstreamError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind().to_string(),
            traceback: err.trace(),
        }
    }
}


/// Transport-neutral response; the axum server and the lambda both render this.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

impl Reply {
    pub fn headers() -> [(HeaderName, HeaderValue); 2] {
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
        ]
    }

    pub fn body_string(&self) -> String {
        self.body.to_string()
    }
}


pub fn region_or_default(region: Option<&str>) -> &str {
    region.unwrap_or(DEFAULT_REGION)
}

/// Fetches prices and carbon intensity for the same window. Either failure fails the whole snapshot.
pub async fn snapshot(client: &UpstreamClient, region: &str) -> Result<Snapshot, UpstreamError> {
    let window = TimeWindow::default_at(Utc::now());

    let (prices, carbon) = tokio::try_join!(
        fetch_prices(client, region, &window),
        fetch_carbon(client, &window),
    )?;

    Ok(Snapshot {
        prices,
        carbon,
        region: region.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub async fn respond(client: &UpstreamClient, region: Option<&str>) -> Reply {
    let region = region_or_default(region);
    tracing::info!(region, "building snapshot");

    match snapshot(client, region).await {
        Ok(snap) => Reply {
            status: StatusCode::OK,
            body: serde_json::to_value(snap).unwrap_or_default(),
        },
        Err(e) => {
            tracing::error!(kind = e.kind(), api = %e.api(), "->> {}", e);
            Reply {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: serde_json::to_value(ErrorBody::from(&e)).unwrap_or_default(),
            }
        }
    }
}
