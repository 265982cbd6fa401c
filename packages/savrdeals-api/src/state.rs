//! Application state shared across handlers.

use crate::config::Config;
use savrdeals_types::{Catalog, MILESTONES};
use std::sync::atomic::AtomicU64;
use std::time::Instant;
use tracing::info;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog<'static>,
    pub start_time: Instant,
    pub request_count: AtomicU64,
}

impl AppState {
    /// Validates the milestone catalog before the service accepts traffic.
    pub fn new(config: Config) -> Result<Self, crate::Error> {
        let catalog = Catalog::new(MILESTONES)?;

        info!(
            milestones = catalog.len(),
            max_listings = config.max_listings,
            "Loaded badge catalog"
        );

        Ok(Self {
            config,
            catalog,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        })
    }
}
