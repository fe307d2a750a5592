pub mod carbon;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod prices;
pub mod window;

pub use client::UpstreamClient;
pub use config::{ConfigError, UpstreamConfig};
pub use error::{Upstream, UpstreamError};
pub use handler::{respond, snapshot, ErrorBody, Reply, Snapshot};
pub use window::TimeWindow;
