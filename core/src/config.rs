use std::time::Duration;


pub const DEFAULT_REGION: &str = "C";
pub const PRODUCT_CODE: &str = "AGILE-24-10-01";
pub const CARBON_REGION_ID: u32 = 13;
pub const PAGE_SIZE: u32 = 2500;
pub const DAYS_BACK: i64 = 1;
pub const DAYS_FORWARD: i64 = 2;
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(20);

pub const OCTOPUS_API_BASE: &str = "https://api.octopus.energy/v1";
pub const CARBON_API_BASE: &str = "https://api.carbonintensity.org.uk";


#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },
    #[error("could not bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
}


/// Where the two upstream APIs live and how long to wait on them.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub octopus_base: String,
    pub carbon_base: String,
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            octopus_base: OCTOPUS_API_BASE.to_string(),
            carbon_base: CARBON_API_BASE.to_string(),
            timeout: UPSTREAM_TIMEOUT,
        }
    }
}

impl UpstreamConfig {
    /// Reads overrides from the environment (and `.env`), falling back to the public APIs.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(base) = std::env::var("OCTOPUS_API_BASE") {
            config.octopus_base = base;
        }
        if let Ok(base) = std::env::var("CARBON_API_BASE") {
            config.carbon_base = base;
        }
        if let Ok(secs) = std::env::var("UPSTREAM_TIMEOUT_SECS") {
            config.timeout = parse_timeout(&secs)?;
        }

        Ok(config)
    }

    pub fn with_base_urls(octopus_base: impl Into<String>, carbon_base: impl Into<String>) -> Self {
        Self {
            octopus_base: octopus_base.into(),
            carbon_base: carbon_base.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn parse_timeout(secs: &str) -> Result<Duration, ConfigError> {
    match secs.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(Duration::from_secs(n)),
        _ => Err(ConfigError::InvalidVar { var: "UPSTREAM_TIMEOUT_SECS", value: secs.to_string() }),
    }
}
