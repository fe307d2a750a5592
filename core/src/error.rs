use std::{error::Error as _, fmt, time::Duration};
use reqwest::StatusCode;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Octopus,
    CarbonIntensity,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::Octopus => write!(f, "Octopus API"),
            Upstream::CarbonIntensity => write!(f, "Carbon Intensity API"),
        }
    }
}


#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("{api} timed out after {}s", .timeout.as_secs())]
    Timeout { api: Upstream, timeout: Duration, source: reqwest::Error },
    #[error("{api} connection failed: {source}")]
    Connect { api: Upstream, source: reqwest::Error },
    #[error("{api} error: {status} for url: {url}")]
    Status { api: Upstream, status: StatusCode, url: String },
    #[error("{api} returned invalid JSON: {source}")]
    Decode { api: Upstream, source: reqwest::Error },
    #[error("{api} request failed: {source}")]
    Request { api: Upstream, source: reqwest::Error },
}

impl UpstreamError {
    pub(crate) fn from_reqwest(api: Upstream, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout { api, timeout, source: err }
        } else if err.is_connect() {
            UpstreamError::Connect { api, source: err }
        } else if err.is_decode() {
            UpstreamError::Decode { api, source: err }
        } else {
            UpstreamError::Request { api, source: err }
        }
    }

    pub fn api(&self) -> Upstream {
        match self {
            UpstreamError::Timeout { api, .. }
            | UpstreamError::Connect { api, .. }
            | UpstreamError::Status { api, .. }
            | UpstreamError::Decode { api, .. }
            | UpstreamError::Request { api, .. } => *api,
        }
    }

    /// Label reported as `type` in the error body.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Timeout { .. } => "Timeout",
            UpstreamError::Connect { .. } => "ConnectionError",
            UpstreamError::Status { .. } => "HTTPError",
            UpstreamError::Decode { .. } => "JSONDecodeError",
            UpstreamError::Request { .. } => "RequestError",
        }
    }

    /// The message followed by every error in the source chain.
    pub fn trace(&self) -> String {
        let mut out = format!("{}: {}", self.kind(), self);
        let mut source = self.source();
        while let Some(err) = source {
            out.push_str("\ncaused by: ");
            out.push_str(&err.to_string());
            source = err.source();
        }
        out
    }
}
