#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Share-token codec for hive layouts.
//!
//! A token is the standard padded base64 encoding of a compact JSON array with
//! one entry per hive slot: `null` for an empty slot, otherwise
//! `{"slug":..,"gifted":..,"level":..}` with keys in exactly that order. The
//! format carries no header so tokens stay interchangeable with links that
//! were shared before the planner existed.

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use hive_planner_catalog::Catalog;
use hive_planner_core::{HiveSlot, LayoutSnapshot, Level, HIVE_SLOT_COUNT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard alphabet that pads on encode and tolerates missing padding on decode.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Errors that can occur while decoding a layout token.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The token was empty or contained only whitespace.
    #[error("layout token was empty")]
    EmptyToken,
    /// The base64 payload could not be decoded.
    #[error("could not decode layout token: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
    /// The decoded payload was not a JSON slot array.
    #[error("could not parse layout payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    /// The slot array did not describe a full hive.
    #[error("layout payload holds {0} slots, expected {expected}", expected = HIVE_SLOT_COUNT)]
    SlotCountMismatch(usize),
}

/// Layout recovered from a token alongside the slugs the catalog did not know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedLayout {
    /// Layout with unresolved slots left empty.
    pub layout: LayoutSnapshot,
    /// Slugs that were dropped because the catalog does not contain them.
    pub unresolved: Vec<String>,
}

#[derive(Serialize)]
struct EncodedSlot<'a> {
    slug: &'a str,
    gifted: bool,
    level: u8,
}

#[derive(Deserialize)]
struct DecodedSlot {
    slug: String,
    #[serde(default)]
    gifted: Option<bool>,
    #[serde(default)]
    level: Option<i64>,
}

/// Encodes the layout into a single-line token suitable for links and storage.
///
/// Equal layouts always produce byte-identical tokens.
#[must_use]
pub fn encode(layout: &LayoutSnapshot) -> String {
    let records: Vec<Option<EncodedSlot<'_>>> = layout
        .slots()
        .iter()
        .map(|slot| {
            slot.occupant().map(|bee| EncodedSlot {
                slug: bee.as_str(),
                gifted: slot.is_gifted(),
                level: slot.level().get(),
            })
        })
        .collect();
    let json = serde_json::to_vec(&records).expect("layout token serialization never fails");
    TOKEN_ENGINE.encode(json)
}

/// Decodes a token, failing closed to an all-empty layout on malformed input.
#[must_use]
pub fn decode(token: &str, catalog: &Catalog) -> LayoutSnapshot {
    match try_decode(token, catalog) {
        Ok(decoded) => {
            if !decoded.unresolved.is_empty() {
                log::debug!(
                    "dropped {} unknown bees from layout token: {}",
                    decoded.unresolved.len(),
                    decoded.unresolved.join(", ")
                );
            }
            decoded.layout
        }
        Err(error) => {
            log::warn!("discarding corrupt layout token: {error}");
            LayoutSnapshot::empty()
        }
    }
}

/// Decodes a token, reporting why it was rejected.
///
/// Slugs missing from the catalog never fail the decode; their slots come back
/// empty and the slugs are listed in [`DecodedLayout::unresolved`].
pub fn try_decode(token: &str, catalog: &Catalog) -> Result<DecodedLayout, DecodeError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::EmptyToken);
    }

    let bytes = TOKEN_ENGINE.decode(trimmed.as_bytes())?;
    let records: Vec<Option<DecodedSlot>> = serde_json::from_slice(&bytes)?;
    if records.len() != HIVE_SLOT_COUNT {
        return Err(DecodeError::SlotCountMismatch(records.len()));
    }

    let mut unresolved = Vec::new();
    let mut records = records.into_iter();
    let slots: [HiveSlot; HIVE_SLOT_COUNT] = std::array::from_fn(|_| {
        let Some(record) = records.next().flatten() else {
            return HiveSlot::empty();
        };
        let Some(bee) = catalog.resolve(&record.slug) else {
            unresolved.push(record.slug);
            return HiveSlot::empty();
        };
        let level = record.level.map_or(Level::DEFAULT, Level::clamped);
        HiveSlot::occupied(bee.slug.clone(), record.gifted.unwrap_or(false), level)
    });

    Ok(DecodedLayout {
        layout: LayoutSnapshot::from_slots(slots),
        unresolved,
    })
}
