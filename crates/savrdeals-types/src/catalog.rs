//! The badge milestone catalog.
//!
//! Catalog order is rank order: every lookup in [`crate::badges`] relies on
//! `required_coins` being strictly increasing and never re-sorts.

use std::collections::HashSet;

use serde::Serialize;

use crate::CatalogError;

/// A named achievement tier unlocked at a coin threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub id: &'static str,
    pub required_coins: u64,
    pub name: &'static str,
    pub rarity: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub icon_key: &'static str,
    pub color_key: &'static str,
}

/// Built-in milestones, ascending by `required_coins`.
pub const MILESTONES: &[Milestone] = &[
    Milestone {
        id: "first_steps",
        required_coins: 10,
        name: "First Steps",
        rarity: "Common",
        description: "Earned your first 10 coins by sharing and discussing deals.",
        emoji: "🌱",
        icon_key: "sprout",
        color_key: "green",
    },
    Milestone {
        id: "deal_hunter",
        required_coins: 25,
        name: "Deal Hunter",
        rarity: "Uncommon",
        description: "Tracked down enough bargains to earn 25 coins.",
        emoji: "🔍",
        icon_key: "search",
        color_key: "blue",
    },
    Milestone {
        id: "bargain_pro",
        required_coins: 50,
        name: "Bargain Pro",
        rarity: "Rare",
        description: "50 coins of community-approved savings.",
        emoji: "💎",
        icon_key: "gem",
        color_key: "purple",
    },
    Milestone {
        id: "savings_expert",
        required_coins: 100,
        name: "Savings Expert",
        rarity: "Epic",
        description: "A trusted voice on what is and is not a real deal.",
        emoji: "🏆",
        icon_key: "trophy",
        color_key: "orange",
    },
    Milestone {
        id: "deal_master",
        required_coins: 200,
        name: "Deal Master",
        rarity: "Legendary",
        description: "200 coins. The community checks your posts first.",
        emoji: "👑",
        icon_key: "crown",
        color_key: "gold",
    },
    Milestone {
        id: "savr_legend",
        required_coins: 500,
        name: "Savr Legend",
        rarity: "Mythic",
        description: "The highest tier on Savrdeals.",
        emoji: "🔥",
        icon_key: "flame",
        color_key: "red",
    },
];

/// Validated, ordered view over a milestone table.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    entries: &'a [Milestone],
}

impl Catalog<'static> {
    /// The compiled-in catalog. Its ordering is checked by unit tests, not at runtime.
    pub const fn builtin() -> Self {
        Self {
            entries: MILESTONES,
        }
    }
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> Catalog<'a> {
    /// Accepts `entries` only if non-empty, strictly ascending, and id-unique.
    pub fn new(entries: &'a [Milestone]) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        let mut previous: Option<u64> = None;
        for milestone in entries {
            if !seen.insert(milestone.id) {
                return Err(CatalogError::DuplicateId {
                    id: milestone.id.to_string(),
                });
            }
            if previous.is_some_and(|coins| milestone.required_coins <= coins) {
                return Err(CatalogError::NotAscending {
                    id: milestone.id.to_string(),
                });
            }
            previous = Some(milestone.required_coins);
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &'a [Milestone] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of leading entries whose threshold is at or below `coins`.
    /// Binary search; correct only because entries are ascending.
    pub(crate) fn unlocked_len(&self, coins: u64) -> usize {
        self.entries.partition_point(|m| m.required_coins <= coins)
    }
}
