//! Shared types and pure-logic utilities for Savrdeals.
//! No I/O — usable from the API service, background jobs, or tests alike.

mod badges;
mod catalog;
mod error;
mod price;
mod ranking;

pub use badges::{BadgeStatus, EquippedBadge};
pub use badges::{
    badge_status, highest_unlocked, is_unlocked, lookup_milestone, next_milestone,
    progress_to_next, unlocked_milestones, validate_equipped,
};
pub use catalog::{Catalog, MILESTONES, Milestone};
pub use error::CatalogError;
pub use price::{coin_balance_from_value, normalize_coins, parse_coin_balance, parse_price};
pub use ranking::{
    HOT_DEAL_MIN_DISCOUNT_PERCENT, LikeEvent, Listing, RankedListing, RankingReport, count_likes,
    discount_percent, rank_hot_deals, rank_hot_deals_with_report,
};
