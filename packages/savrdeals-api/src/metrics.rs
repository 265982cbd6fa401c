//! Prometheus metrics (lock-free atomics, zero allocation on hot path).

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use savrdeals_types::RankingReport;

pub static METRICS: Metrics = Metrics::new();

pub struct Metrics {
    // --- Traffic ---
    pub requests_total: AtomicU64,
    pub request_errors: AtomicU64,
    pub badge_requests: AtomicU64,
    pub hot_deal_requests: AtomicU64,

    // --- Ranking ---
    pub listings_considered: AtomicU64,
    pub listings_ranked: AtomicU64,
    pub listings_ineligible: AtomicU64,
    pub listings_below_threshold: AtomicU64,

    // --- Latency (μs, updated via CAS) ---
    pub ranking_duration_us_sum: AtomicU64,
    pub ranking_duration_us_max: AtomicU64,
}

impl Metrics {
    const fn new() -> Self {
        Self {
            requests_total: AtomicU64::new(0),
            request_errors: AtomicU64::new(0),
            badge_requests: AtomicU64::new(0),
            hot_deal_requests: AtomicU64::new(0),
            listings_considered: AtomicU64::new(0),
            listings_ranked: AtomicU64::new(0),
            listings_ineligible: AtomicU64::new(0),
            listings_below_threshold: AtomicU64::new(0),
            ranking_duration_us_sum: AtomicU64::new(0),
            ranking_duration_us_max: AtomicU64::new(0),
        }
    }

    pub fn record_ranking(&self, report: &RankingReport, start: Instant) {
        self.listings_considered
            .fetch_add(report.considered as u64, Ordering::Relaxed);
        self.listings_ranked
            .fetch_add(report.deals.len() as u64, Ordering::Relaxed);
        self.listings_ineligible
            .fetch_add(report.ineligible as u64, Ordering::Relaxed);
        self.listings_below_threshold
            .fetch_add(report.below_threshold as u64, Ordering::Relaxed);

        let us = start.elapsed().as_micros() as u64;
        self.ranking_duration_us_sum.fetch_add(us, Ordering::Relaxed);
        // CAS loop for max tracking
        let mut cur = self.ranking_duration_us_max.load(Ordering::Relaxed);
        while us > cur {
            match self.ranking_duration_us_max.compare_exchange_weak(
                cur,
                us,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(actual) => cur = actual,
            }
        }
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self, uptime_secs: u64, catalog_size: usize) -> String {
        let requests_total = self.requests_total.load(Ordering::Relaxed);
        let request_errors = self.request_errors.load(Ordering::Relaxed);
        let badge_requests = self.badge_requests.load(Ordering::Relaxed);
        let hot_deal_requests = self.hot_deal_requests.load(Ordering::Relaxed);
        let considered = self.listings_considered.load(Ordering::Relaxed);
        let ranked = self.listings_ranked.load(Ordering::Relaxed);
        let ineligible = self.listings_ineligible.load(Ordering::Relaxed);
        let below = self.listings_below_threshold.load(Ordering::Relaxed);
        let dur_sum = self.ranking_duration_us_sum.load(Ordering::Relaxed);
        let dur_max = self.ranking_duration_us_max.swap(0, Ordering::Relaxed);

        // Convert μs to seconds for Prometheus conventions
        let dur_sum_s = dur_sum as f64 / 1_000_000.0;
        let dur_max_s = dur_max as f64 / 1_000_000.0;

        format!(
            "\
# HELP savrdeals_requests_total Total HTTP requests received.\n\
# TYPE savrdeals_requests_total counter\n\
savrdeals_requests_total {requests_total}\n\
# HELP savrdeals_request_errors_total Requests answered with an error status.\n\
# TYPE savrdeals_request_errors_total counter\n\
savrdeals_request_errors_total {request_errors}\n\
# HELP savrdeals_badge_requests_total Badge lookups and status queries.\n\
# TYPE savrdeals_badge_requests_total counter\n\
savrdeals_badge_requests_total {badge_requests}\n\
# HELP savrdeals_hot_deal_requests_total Hot-deal ranking requests.\n\
# TYPE savrdeals_hot_deal_requests_total counter\n\
savrdeals_hot_deal_requests_total {hot_deal_requests}\n\
# HELP savrdeals_listings_considered_total Listings submitted for ranking.\n\
# TYPE savrdeals_listings_considered_total counter\n\
savrdeals_listings_considered_total {considered}\n\
# HELP savrdeals_listings_ranked_total Listings returned as hot deals.\n\
# TYPE savrdeals_listings_ranked_total counter\n\
savrdeals_listings_ranked_total {ranked}\n\
# HELP savrdeals_listings_ineligible_total Unpublished, malformed, or undiscounted listings.\n\
# TYPE savrdeals_listings_ineligible_total counter\n\
savrdeals_listings_ineligible_total {ineligible}\n\
# HELP savrdeals_listings_below_threshold_total Discounted listings under the hot threshold.\n\
# TYPE savrdeals_listings_below_threshold_total counter\n\
savrdeals_listings_below_threshold_total {below}\n\
# HELP savrdeals_ranking_duration_seconds_sum Total ranking time (seconds).\n\
# TYPE savrdeals_ranking_duration_seconds_sum counter\n\
savrdeals_ranking_duration_seconds_sum {dur_sum_s:.6}\n\
# HELP savrdeals_ranking_duration_seconds_max Max ranking time since last scrape (seconds).\n\
# TYPE savrdeals_ranking_duration_seconds_max gauge\n\
savrdeals_ranking_duration_seconds_max {dur_max_s:.6}\n\
# HELP savrdeals_uptime_seconds Seconds since the service started.\n\
# TYPE savrdeals_uptime_seconds gauge\n\
savrdeals_uptime_seconds {uptime_secs}\n\
# HELP savrdeals_badge_catalog_size Milestones in the badge catalog.\n\
# TYPE savrdeals_badge_catalog_size gauge\n\
savrdeals_badge_catalog_size {catalog_size}\n"
        )
    }
}
