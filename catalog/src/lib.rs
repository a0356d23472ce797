#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Immutable bee catalog that hive layouts resolve their occupants against.
//!
//! The catalog is built once at startup, either from the bundled bee table or
//! from an externally provisioned JSON document, and never mutates afterwards.

mod builtin;

use std::collections::{BTreeMap, HashMap};

use hive_planner_core::{BeeColor, BeeRarity, BeeSlug};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use self::builtin::BUILTIN_BEES;

/// Placeable bee known to the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeeRecord {
    /// Stable identifier referenced by hive slots and share tokens.
    pub slug: BeeSlug,
    /// Human readable name.
    pub name: String,
    /// Rarity tier of the bee.
    pub rarity: BeeRarity,
    /// Colour affinity of the bee.
    pub color: BeeColor,
}

/// Errors raised while constructing a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two records shared the same slug.
    #[error("catalog contains duplicate slug `{0}`")]
    DuplicateSlug(BeeSlug),
    /// A record carried a blank slug.
    #[error("catalog record `{0}` has an empty slug")]
    EmptySlug(String),
    /// The catalog document could not be parsed.
    #[error("could not parse catalog document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

/// Read-only lookup table from bee slug to bee record.
#[derive(Clone, Debug)]
pub struct Catalog {
    records: Vec<BeeRecord>,
    index: HashMap<BeeSlug, usize>,
}

impl Catalog {
    /// Builds the catalog bundled with the planner.
    #[must_use]
    pub fn builtin() -> Self {
        let records = BUILTIN_BEES
            .iter()
            .map(|&(slug, name, rarity, color)| BeeRecord {
                slug: BeeSlug::new(slug),
                name: name.to_owned(),
                rarity,
                color,
            })
            .collect::<Vec<_>>();
        let index = records
            .iter()
            .enumerate()
            .map(|(position, record)| (record.slug.clone(), position))
            .collect();
        Self { records, index }
    }

    /// Builds a catalog from explicit records, preserving their order.
    pub fn from_records(records: Vec<BeeRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.slug.as_str().trim().is_empty() {
                return Err(CatalogError::EmptySlug(record.name.clone()));
            }
            if index.insert(record.slug.clone(), position).is_some() {
                return Err(CatalogError::DuplicateSlug(record.slug.clone()));
            }
        }
        log::debug!("catalog built with {} bees", records.len());
        Ok(Self { records, index })
    }

    /// Parses a JSON array of bee records. Unknown fields are ignored.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let records: Vec<BeeRecord> = serde_json::from_str(document)?;
        Self::from_records(records)
    }

    /// Looks up a bee by slug.
    #[must_use]
    pub fn resolve(&self, slug: &str) -> Option<&BeeRecord> {
        self.index
            .get(slug)
            .and_then(|&position| self.records.get(position))
    }

    /// Number of bees in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Reports whether the catalog holds no bees.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates bees in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &BeeRecord> {
        self.records.iter()
    }

    /// Case-insensitive substring search over name, rarity and colour.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&BeeRecord> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record.name.to_lowercase().contains(&needle)
                    || record.rarity.as_str().contains(&needle)
                    || record.color.as_str().contains(&needle)
            })
            .collect()
    }

    /// Bees matching every provided criterion; `None` matches anything.
    #[must_use]
    pub fn filter(&self, rarity: Option<BeeRarity>, color: Option<BeeColor>) -> Vec<&BeeRecord> {
        self.records
            .iter()
            .filter(|record| rarity.map_or(true, |wanted| record.rarity == wanted))
            .filter(|record| color.map_or(true, |wanted| record.color == wanted))
            .collect()
    }

    /// Counts bees per rarity tier. Tiers without bees are omitted.
    #[must_use]
    pub fn count_by_rarity(&self) -> BTreeMap<BeeRarity, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.rarity).or_insert(0) += 1;
        }
        counts
    }

    /// Counts bees per colour. Colours without bees are omitted.
    #[must_use]
    pub fn count_by_color(&self) -> BTreeMap<BeeColor, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.color).or_insert(0) += 1;
        }
        counts
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
