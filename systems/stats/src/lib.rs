#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Summary statistics over a hive layout.

use std::collections::BTreeMap;

use hive_planner_catalog::Catalog;
use hive_planner_core::{BeeColor, BeeRarity, LayoutSnapshot};

/// Counts describing the composition of a hive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HiveStats {
    total: usize,
    gifted: usize,
    by_color: BTreeMap<BeeColor, usize>,
    by_rarity: BTreeMap<BeeRarity, usize>,
}

impl HiveStats {
    /// Computes statistics for the layout.
    ///
    /// Bees missing from the catalog count toward [`HiveStats::total`] and
    /// [`HiveStats::gifted`] but not toward colour or rarity breakdowns.
    #[must_use]
    pub fn compute(layout: &LayoutSnapshot, catalog: &Catalog) -> Self {
        let mut stats = Self::default();

        for slot in layout.slots() {
            let Some(bee) = slot.occupant() else {
                continue;
            };

            stats.total += 1;
            if slot.is_gifted() {
                stats.gifted += 1;
            }

            if let Some(record) = catalog.resolve(bee.as_str()) {
                *stats.by_color.entry(record.color).or_insert(0) += 1;
                *stats.by_rarity.entry(record.rarity).or_insert(0) += 1;
            }
        }

        stats
    }

    /// Number of occupied slots.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of gifted bees.
    #[must_use]
    pub const fn gifted(&self) -> usize {
        self.gifted
    }

    /// Number of bees with the provided colour.
    #[must_use]
    pub fn color(&self, color: BeeColor) -> usize {
        self.by_color.get(&color).copied().unwrap_or(0)
    }

    /// Number of bees with the provided rarity.
    #[must_use]
    pub fn rarity(&self, rarity: BeeRarity) -> usize {
        self.by_rarity.get(&rarity).copied().unwrap_or(0)
    }
}
