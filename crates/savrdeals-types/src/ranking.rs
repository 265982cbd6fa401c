//! Hot-deal ranking: discount-filtered, like-sorted listings.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::parse_price;

/// Minimum rounded discount for a listing to count as hot. Inclusive.
pub const HOT_DEAL_MIN_DISCOUNT_PERCENT: u32 = 55;

/// A deal listing as read from the persistence layer.
///
/// Prices are kept as raw JSON because stored rows may hold numbers, numeric
/// strings, or garbage; eligibility is decided at ranking time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub price: Value,
    #[serde(default, alias = "oldPrice")]
    pub old_price: Value,
    #[serde(default = "published_by_default")]
    pub published: bool,
    /// Display fields (title, image, store...) passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Listing {
    pub fn new(id: impl Into<String>, price: Value, old_price: Value) -> Self {
        Self {
            id: id.into(),
            price,
            old_price,
            published: true,
            extra: Map::new(),
        }
    }

    /// `None` when the listing is unpublished, malformed, or not discounted.
    pub fn discount_percent(&self) -> Option<u32> {
        if !self.published {
            return None;
        }
        discount_percent(&self.price, &self.old_price)
    }
}

/// One user liking one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeEvent {
    #[serde(alias = "listingId", deserialize_with = "string_or_number")]
    pub listing_id: String,
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
}

impl LikeEvent {
    pub fn new(listing_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            listing_id: listing_id.into(),
            user_id: Some(user_id.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub discount_percent: u32,
    pub like_count: u64,
}

/// Ranked deals plus how many inputs were dropped at each stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankingReport {
    pub deals: Vec<RankedListing>,
    pub considered: usize,
    /// Unpublished, unparsable, negative, or not discounted.
    pub ineligible: usize,
    pub below_threshold: usize,
}

/// Rounded discount, half away from zero.
///
/// `None` unless both prices are finite, `price >= 0`, and `old_price > price`.
/// Multiplying before dividing keeps exact halves (e.g. 54.5) exact; prices
/// near `f64::MAX` overflow that product and are divided first instead.
pub fn discount_percent(price: &Value, old_price: &Value) -> Option<u32> {
    let price = parse_price(price)?;
    let old_price = parse_price(old_price)?;
    if price < 0.0 || old_price <= price {
        return None;
    }
    let saved = old_price - price;
    let exact = saved * 100.0 / old_price;
    let percent = if exact.is_finite() {
        exact
    } else {
        saved / old_price * 100.0
    }
    .round();
    percent.is_finite().then_some(percent as u32)
}

/// Like events per listing id. Listings with no likes are simply absent.
pub fn count_likes(likes: &[LikeEvent]) -> HashMap<&str, u64> {
    let mut counts = HashMap::with_capacity(likes.len());
    for like in likes {
        *counts.entry(like.listing_id.as_str()).or_insert(0) += 1;
    }
    counts
}

pub fn rank_hot_deals(listings: &[Listing], likes: &[LikeEvent]) -> Vec<RankedListing> {
    rank_hot_deals_with_report(listings, likes).deals
}

/// Keep hot listings, attach like counts, sort by likes descending.
/// The sort is stable: equal like counts keep their input order.
pub fn rank_hot_deals_with_report(listings: &[Listing], likes: &[LikeEvent]) -> RankingReport {
    let counts = count_likes(likes);
    let mut report = RankingReport {
        considered: listings.len(),
        ..RankingReport::default()
    };

    for listing in listings {
        let Some(discount) = listing.discount_percent() else {
            report.ineligible += 1;
            continue;
        };
        if discount < HOT_DEAL_MIN_DISCOUNT_PERCENT {
            report.below_threshold += 1;
            continue;
        }
        let like_count = counts.get(listing.id.as_str()).copied().unwrap_or(0);
        let mut listing = listing.clone();
        listing
            .extra
            .retain(|key, _| key != "discount_percent" && key != "like_count");
        report.deals.push(RankedListing {
            listing,
            discount_percent: discount,
            like_count,
        });
    }

    report
        .deals
        .sort_by(|a, b| b.like_count.cmp(&a.like_count));
    report
}

fn published_by_default() -> bool {
    true
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
