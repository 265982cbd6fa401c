//! # Savrdeals API
//!
//! Stateless HTTP front for the badge progression engine and the hot-deal
//! ranking. Callers fetch users, listings, and likes from the database
//! service themselves and post them here for computation.
//!
//! ## Quick Start
//! ```bash
//! cargo run --bin savrdeals-api
//! ```
//!
//! ## Endpoints
//! - `GET /health` - Health check
//! - `GET /metrics` - Prometheus metrics
//! - `GET /badges` - Full milestone catalog
//! - `GET /badges/status?coins=N` - Tier, next tier, and progress for a balance
//! - `GET /badges/{id}` - One milestone
//! - `GET /badges/{id}/unlocked?coins=N` - Whether a balance unlocks a badge
//! - `POST /badges/equip` - Validate an equipped badge against a balance
//! - `POST /deals/hot` - Rank listings into hot deals

pub mod config;
mod error;
mod handlers;
pub mod metrics;
pub mod middleware;
mod response;
mod router;
mod state;

pub use config::Config;
pub use error::Error;
pub use router::create as create_router;
pub use state::AppState;
