//! Response types for the API.

use savrdeals_types::{BadgeStatus, Milestone, RankingReport};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
    pub requests: u64,
    pub catalog_size: usize,
}

#[derive(Serialize)]
pub struct BadgeListResponse {
    pub success: bool,
    pub badges: &'static [Milestone],
}

#[derive(Serialize)]
pub struct BadgeResponse {
    pub success: bool,
    pub badge: &'static Milestone,
}

#[derive(Serialize)]
pub struct BadgeStatusResponse {
    pub success: bool,
    #[serde(flatten)]
    pub status: BadgeStatus<'static>,
    pub unlocked: &'static [Milestone],
}

#[derive(Serialize)]
pub struct UnlockCheckResponse {
    pub success: bool,
    pub badge_id: String,
    pub coins: u64,
    pub unlocked: bool,
}

/// `badge` is `None` when the user cleared their equipped badge.
#[derive(Serialize)]
pub struct EquipResponse {
    pub success: bool,
    pub badge: Option<&'static Milestone>,
}

#[derive(Serialize)]
pub struct HotDealsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: RankingReport,
}
