//! Service configuration.

use serde::Deserialize;

/// Loaded from `savrdeals.toml` (optional) and `SAVRDEALS_*` env vars.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::bind_address")]
    pub bind_address: String,

    /// Upper bound on listings accepted by `POST /deals/hot`.
    #[serde(default = "defaults::max_listings")]
    pub max_listings: usize,

    #[serde(default = "defaults::max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default = "defaults::request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "defaults::max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    /// Comma-separated origins; empty allows any origin.
    #[serde(default)]
    pub cors_allowed_origins: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: defaults::bind_address(),
            max_listings: defaults::max_listings(),
            max_body_bytes: defaults::max_body_bytes(),
            request_timeout_secs: defaults::request_timeout_secs(),
            max_concurrent_requests: defaults::max_concurrent_requests(),
            cors_allowed_origins: String::new(),
        }
    }
}

impl Config {
    pub fn cors_origins(&self) -> Vec<&str> {
        self.cors_allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .collect()
    }
}

mod defaults {
    pub fn bind_address() -> String {
        "0.0.0.0:3050".into()
    }

    pub fn max_listings() -> usize {
        5_000
    }

    pub fn max_body_bytes() -> usize {
        4 * 1024 * 1024
    }

    pub fn request_timeout_secs() -> u64 {
        10
    }

    pub fn max_concurrent_requests() -> usize {
        256
    }
}
