//! Badge progression: coin balance → tier, next tier, and progress.
//!
//! Every operation is total. A balance below the first threshold has no tier,
//! a balance at or above the last threshold has no next tier. Thresholds are
//! inclusive: a balance equal to `required_coins` unlocks that milestone.

use serde::Serialize;

use crate::catalog::{Catalog, Milestone};

/// Summary shown on a profile's badge panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeStatus<'a> {
    pub coins: u64,
    pub current: Option<&'a Milestone>,
    pub next: Option<&'a Milestone>,
    pub progress_percent: f64,
    pub coins_to_next: Option<u64>,
    pub unlocked_count: usize,
    pub total_count: usize,
}

/// Classification of a user's stored equipped-badge reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquippedBadge<'a> {
    /// No badge selected.
    None,
    Equipped(&'a Milestone),
    /// Known badge the balance has not reached.
    Locked(&'a Milestone),
    /// Id not present in the catalog.
    Unknown,
}

impl<'a> EquippedBadge<'a> {
    /// The milestone to display, if any.
    pub fn displayable(&self) -> Option<&'a Milestone> {
        match *self {
            Self::Equipped(m) => Some(m),
            Self::None | Self::Locked(_) | Self::Unknown => None,
        }
    }
}

impl<'a> Catalog<'a> {
    pub fn lookup(&self, id: &str) -> Option<&'a Milestone> {
        self.entries().iter().find(|m| m.id == id)
    }

    /// Highest-threshold milestone with `required_coins <= coins`.
    pub fn highest_unlocked(&self, coins: u64) -> Option<&'a Milestone> {
        self.unlocked_len(coins)
            .checked_sub(1)
            .and_then(|idx| self.entries().get(idx))
    }

    pub fn is_unlocked(&self, id: &str, coins: u64) -> bool {
        self.lookup(id).is_some_and(|m| m.required_coins <= coins)
    }

    /// First milestone with `required_coins > coins`.
    pub fn next_milestone(&self, coins: u64) -> Option<&'a Milestone> {
        self.entries().get(self.unlocked_len(coins))
    }

    /// All unlocked milestones, in rank order.
    pub fn unlocked(&self, coins: u64) -> &'a [Milestone] {
        &self.entries()[..self.unlocked_len(coins)]
    }

    /// Percent of the way from the current tier (or zero) to the next, in `[0, 100]`.
    pub fn progress_to_next(&self, coins: u64) -> f64 {
        let Some(next) = self.next_milestone(coins) else {
            return 100.0;
        };
        let base = self.highest_unlocked(coins).map_or(0, |m| m.required_coins);
        // next.required_coins > coins >= base, so the span is never zero.
        let span = next.required_coins.saturating_sub(base);
        if span == 0 {
            return 0.0;
        }
        let gained = coins.saturating_sub(base);
        (gained as f64 / span as f64 * 100.0).clamp(0.0, 100.0)
    }

    pub fn status(&self, coins: u64) -> BadgeStatus<'a> {
        let next = self.next_milestone(coins);
        BadgeStatus {
            coins,
            current: self.highest_unlocked(coins),
            next,
            progress_percent: self.progress_to_next(coins),
            coins_to_next: next.map(|m| m.required_coins - coins),
            unlocked_count: self.unlocked_len(coins),
            total_count: self.len(),
        }
    }

    pub fn validate_equipped(&self, id: Option<&str>, coins: u64) -> EquippedBadge<'a> {
        let Some(id) = id else {
            return EquippedBadge::None;
        };
        match self.lookup(id) {
            Some(m) if m.required_coins <= coins => EquippedBadge::Equipped(m),
            Some(m) => EquippedBadge::Locked(m),
            None => EquippedBadge::Unknown,
        }
    }
}

pub fn lookup_milestone(id: &str) -> Option<&'static Milestone> {
    Catalog::builtin().lookup(id)
}

pub fn highest_unlocked(coins: u64) -> Option<&'static Milestone> {
    Catalog::builtin().highest_unlocked(coins)
}

pub fn is_unlocked(id: &str, coins: u64) -> bool {
    Catalog::builtin().is_unlocked(id, coins)
}

pub fn next_milestone(coins: u64) -> Option<&'static Milestone> {
    Catalog::builtin().next_milestone(coins)
}

pub fn unlocked_milestones(coins: u64) -> &'static [Milestone] {
    Catalog::builtin().unlocked(coins)
}

pub fn progress_to_next(coins: u64) -> f64 {
    Catalog::builtin().progress_to_next(coins)
}

pub fn badge_status(coins: u64) -> BadgeStatus<'static> {
    Catalog::builtin().status(coins)
}

pub fn validate_equipped(id: Option<&str>, coins: u64) -> EquippedBadge<'static> {
    Catalog::builtin().validate_equipped(id, coins)
}
