//! HTTP request handlers.

use crate::error::Error;
use crate::metrics::METRICS;
use crate::middleware::RequestId;
use crate::response::{
    BadgeListResponse, BadgeResponse, BadgeStatusResponse, EquipResponse, HealthResponse,
    HotDealsResponse, UnlockCheckResponse,
};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use savrdeals_types::{
    coin_balance_from_value, parse_coin_balance, rank_hot_deals_with_report, EquippedBadge,
    LikeEvent, Listing,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// `?coins=` is parsed leniently: missing or malformed means 0.
#[derive(Debug, Deserialize)]
pub struct CoinsQuery {
    coins: Option<String>,
}

impl CoinsQuery {
    fn balance(&self) -> u64 {
        self.coins.as_deref().map_or(0, parse_coin_balance)
    }
}

#[derive(Debug, Deserialize)]
pub struct EquipRequest {
    badge_id: Option<String>,
    #[serde(default)]
    coins: Value,
}

/// Rows are kept raw so one malformed row cannot reject the whole batch.
#[derive(Debug, Deserialize)]
pub struct HotDealsRequest {
    #[serde(default)]
    listings: Vec<Value>,
    #[serde(default)]
    likes: Vec<Value>,
}

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: state.start_time.elapsed().as_secs(),
        requests: state.request_count.load(Ordering::Relaxed),
        catalog_size: state.catalog.len(),
    })
}

/// Prometheus metrics in text exposition format.
pub async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = METRICS.render(state.start_time.elapsed().as_secs(), state.catalog.len());
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4",
        )],
        body,
    )
}

pub async fn list_badges(State(state): State<Arc<AppState>>) -> Json<BadgeListResponse> {
    count_badge_request(&state);
    Json(BadgeListResponse {
        success: true,
        badges: state.catalog.entries(),
    })
}

pub async fn get_badge(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BadgeResponse>, Error> {
    count_badge_request(&state);
    let badge = state
        .catalog
        .lookup(&id)
        .ok_or_else(|| Error::NotFound(format!("badge {id}")))?;
    Ok(Json(BadgeResponse {
        success: true,
        badge,
    }))
}

pub async fn badge_status(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CoinsQuery>,
) -> Json<BadgeStatusResponse> {
    count_badge_request(&state);
    let coins = query.balance();
    Json(BadgeStatusResponse {
        success: true,
        status: state.catalog.status(coins),
        unlocked: state.catalog.unlocked(coins),
    })
}

/// Unknown ids answer `unlocked: false`, never 404.
pub async fn badge_unlocked(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<CoinsQuery>,
) -> Json<UnlockCheckResponse> {
    count_badge_request(&state);
    let coins = query.balance();
    Json(UnlockCheckResponse {
        success: true,
        unlocked: state.catalog.is_unlocked(&id, coins),
        badge_id: id,
        coins,
    })
}

/// Check whether a user may equip (or keep) a badge at their balance.
pub async fn equip_badge(
    State(state): State<Arc<AppState>>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<EquipRequest>, JsonRejection>,
) -> Result<Json<EquipResponse>, Error> {
    count_badge_request(&state);
    let Json(request) = payload.map_err(|e| {
        warn!(req_id = %req_id.0, error = %e, "Invalid equip body");
        Error::from(e)
    })?;
    let coins = coin_balance_from_value(&request.coins);

    match state
        .catalog
        .validate_equipped(request.badge_id.as_deref(), coins)
    {
        EquippedBadge::None => Ok(Json(EquipResponse {
            success: true,
            badge: None,
        })),
        EquippedBadge::Equipped(badge) => {
            debug!(req_id = %req_id.0, badge = badge.id, coins, "Badge equip allowed");
            Ok(Json(EquipResponse {
                success: true,
                badge: Some(badge),
            }))
        }
        EquippedBadge::Locked(badge) => Err(Error::Forbidden(format!(
            "badge {} requires {} coins, balance is {coins}",
            badge.id, badge.required_coins
        ))),
        EquippedBadge::Unknown => Err(Error::NotFound(format!(
            "badge {}",
            request.badge_id.unwrap_or_default()
        ))),
    }
}

/// Rank posted listings into hot deals. Malformed rows are dropped, not rejected.
pub async fn hot_deals(
    State(state): State<Arc<AppState>>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<HotDealsRequest>, JsonRejection>,
) -> Result<Json<HotDealsResponse>, Error> {
    let start = Instant::now();
    METRICS.hot_deal_requests.fetch_add(1, Ordering::Relaxed);
    state.request_count.fetch_add(1, Ordering::Relaxed);

    let Json(request) = payload.map_err(|e| {
        warn!(req_id = %req_id.0, error = %e, "Invalid hot deals body");
        Error::from(e)
    })?;

    if request.listings.len() > state.config.max_listings {
        warn!(
            req_id = %req_id.0,
            listings = request.listings.len(),
            max = state.config.max_listings,
            "Too many listings"
        );
        return Err(Error::PayloadTooLarge(format!(
            "{} listings posted, at most {} accepted",
            request.listings.len(),
            state.config.max_listings
        )));
    }

    let submitted = request.listings.len();
    let listings: Vec<Listing> = decode_rows(request.listings);
    let likes: Vec<LikeEvent> = decode_rows(request.likes);
    let undecodable = submitted - listings.len();

    let mut report = rank_hot_deals_with_report(&listings, &likes);
    report.considered += undecodable;
    report.ineligible += undecodable;
    METRICS.record_ranking(&report, start);

    info!(
        req_id = %req_id.0,
        considered = report.considered,
        hot = report.deals.len(),
        ineligible = report.ineligible,
        below_threshold = report.below_threshold,
        "Ranked hot deals"
    );

    Ok(Json(HotDealsResponse {
        success: true,
        report,
    }))
}

fn count_badge_request(state: &AppState) {
    METRICS.badge_requests.fetch_add(1, Ordering::Relaxed);
    state.request_count.fetch_add(1, Ordering::Relaxed);
}

/// Decode each row independently, skipping the ones that do not fit `T`.
fn decode_rows<T: serde::de::DeserializeOwned>(rows: Vec<Value>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                debug!(error = %e, "Skipping undecodable row");
                None
            }
        })
        .collect()
}
