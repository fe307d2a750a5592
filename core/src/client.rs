use std::sync::Arc;
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::error::{Upstream, UpstreamError};


/// HTTP client shared by both fetchers.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: Arc<UpstreamConfig>,
}

impl UpstreamClient {
    pub fn new_w_client(http: reqwest::Client, config: UpstreamConfig) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    pub fn new(config: UpstreamConfig) -> Self {
        Self::new_w_client(reqwest::Client::new(), config)
    }

    /// GETs `url` and decodes the body as untyped JSON. Non-2xx is an error.
    pub(crate) async fn get_json(
        &self,
        api: Upstream,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Value, UpstreamError> {
        let timeout = self.config.timeout;
        let wrap = |e: reqwest::Error| UpstreamError::from_reqwest(api, timeout, e);

        let res = self.http.get(url)
            .query(query)
            .timeout(timeout)
            .send()
            .await
            .map_err(wrap)?;

        let status = res.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                api,
                status,
                url: res.url().to_string(),
            });
        }

        res.json::<Value>().await.map_err(wrap)
    }
}

/// Follows `path` through nested objects, giving `[]` when any step is missing.
pub(crate) fn take_path(mut body: Value, path: &[&str]) -> Value {
    for key in path {
        body = match body {
            Value::Object(mut map) => match map.remove(*key) {
                Some(v) => v,
                None => return Value::Array(Vec::new()),
            },
            _ => return Value::Array(Vec::new()),
        };
    }
    body
}
