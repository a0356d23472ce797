#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Hive Planner workspace.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative hive session, and pure systems. Adapters submit [`Command`]
//! values describing desired layout mutations, the session executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! describing what actually changed. Commands that leave the layout untouched
//! produce no events.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the planner boots.
pub const WELCOME_BANNER: &str = "Welcome to Hive Planner.";

/// Number of slots contained in every hive layout.
pub const HIVE_SLOT_COUNT: usize = 25;

/// Commands that express all permissible hive layout mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Places a bee into a slot, overwriting any existing occupant.
    PlaceBee {
        /// Catalog slug of the bee being placed.
        bee: BeeSlug,
        /// Slot receiving the bee.
        slot: SlotIndex,
        /// Whether the placed bee is gifted.
        gifted: bool,
        /// Level assigned to the placed bee.
        level: Level,
    },
    /// Moves a slot's contents to another slot, swapping when the target is occupied.
    MoveOrSwap {
        /// Slot the contents are taken from.
        from: SlotIndex,
        /// Slot the contents are dropped onto.
        to: SlotIndex,
    },
    /// Empties the provided slot.
    RemoveBee {
        /// Slot to empty.
        slot: SlotIndex,
    },
    /// Flips the gifted flag of the bee occupying the slot.
    ToggleGifted {
        /// Slot whose occupant is toggled.
        slot: SlotIndex,
    },
    /// Resets every slot to empty.
    ClearHive,
    /// Rewrites the level of every occupied slot.
    SetDefaultLevel {
        /// Level applied to occupied slots.
        level: Level,
    },
    /// Replaces the entire layout, e.g. after importing a share token.
    ImportLayout {
        /// Layout adopted by the session.
        layout: LayoutSnapshot,
    },
    /// Reverts the most recent recorded mutation.
    Undo,
    /// Re-applies the most recently undone mutation.
    Redo,
    /// Drops the undo and redo stacks without touching the layout.
    ClearHistory,
}

/// Events broadcast by the session after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a bee was placed into a slot.
    BeePlaced {
        /// Slot that received the bee.
        slot: SlotIndex,
        /// Slug of the placed bee.
        bee: BeeSlug,
    },
    /// Confirms that a bee moved into a previously empty slot.
    BeeMoved {
        /// Slot the bee left.
        from: SlotIndex,
        /// Slot the bee now occupies.
        to: SlotIndex,
    },
    /// Confirms that the contents of two slots were exchanged.
    SlotsSwapped {
        /// Slot the drag started from.
        from: SlotIndex,
        /// Slot the drag ended on.
        to: SlotIndex,
    },
    /// Confirms that a bee was removed from a slot.
    BeeRemoved {
        /// Slot that was emptied.
        slot: SlotIndex,
        /// Slug of the removed bee.
        bee: BeeSlug,
    },
    /// Confirms that a slot's gifted flag changed.
    GiftedToggled {
        /// Slot whose occupant changed.
        slot: SlotIndex,
        /// Gifted flag after the toggle.
        gifted: bool,
    },
    /// Confirms that every slot was emptied.
    HiveCleared,
    /// Confirms that occupied slots adopted a new level.
    LevelsChanged {
        /// Level written to the listed slots.
        level: Level,
        /// Slots whose level actually changed.
        slots: Vec<SlotIndex>,
    },
    /// Confirms that an imported layout replaced the current one.
    LayoutImported,
    /// Confirms that the session stepped back one history entry.
    Undone,
    /// Confirms that the session stepped forward one history entry.
    Redone,
    /// Confirms that the undo and redo stacks were discarded.
    HistoryCleared,
}

impl Event {
    /// Reports whether the event implies the current layout differs from before.
    #[must_use]
    pub const fn changes_layout(&self) -> bool {
        !matches!(self, Self::HistoryCleared)
    }
}

/// Stable catalog identifier of a bee.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeeSlug(String);

impl BeeSlug {
    /// Creates a new slug wrapper.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrows the slug text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BeeSlug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BeeSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position of a slot within the hive, always within `0..HIVE_SLOT_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// Creates a slot index, returning `None` when the value lies outside the hive.
    #[must_use]
    pub const fn new(value: usize) -> Option<Self> {
        if value < HIVE_SLOT_COUNT {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Zero-based position of the slot.
    #[must_use]
    pub const fn get(&self) -> usize {
        self.0 as usize
    }

    /// Iterates every slot index in hive order.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (0..HIVE_SLOT_COUNT as u8).map(Self)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display level of a hive bee, clamped to `Level::MIN..=Level::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Level(u8);

impl Level {
    /// Lowest representable level.
    pub const MIN: Level = Level(1);
    /// Highest representable level.
    pub const MAX: Level = Level(25);
    /// Level assigned when none is provided.
    pub const DEFAULT: Level = Level(12);

    /// Creates a level, clamping the value into the supported range.
    #[must_use]
    pub const fn clamped(value: i64) -> Self {
        if value < Self::MIN.0 as i64 {
            Self::MIN
        } else if value > Self::MAX.0 as i64 {
            Self::MAX
        } else {
            Self(value as u8)
        }
    }

    /// Numeric value of the level.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Next level up, saturating at [`Level::MAX`].
    #[must_use]
    pub const fn increment(self) -> Self {
        Self::clamped(self.0 as i64 + 1)
    }

    /// Next level down, saturating at [`Level::MIN`].
    #[must_use]
    pub const fn decrement(self) -> Self {
        Self::clamped(self.0 as i64 - 1)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Single position within the hive layout.
///
/// Empty slots always carry default flags so that two empty slots compare equal
/// regardless of what previously occupied them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HiveSlot {
    occupant: Option<BeeSlug>,
    gifted: bool,
    level: Level,
}

impl HiveSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            occupant: None,
            gifted: false,
            level: Level::DEFAULT,
        }
    }

    /// Creates a slot occupied by the provided bee.
    #[must_use]
    pub const fn occupied(bee: BeeSlug, gifted: bool, level: Level) -> Self {
        Self {
            occupant: Some(bee),
            gifted,
            level,
        }
    }

    /// Bee placed in the slot, if any.
    #[must_use]
    pub fn occupant(&self) -> Option<&BeeSlug> {
        self.occupant.as_ref()
    }

    /// Reports whether the slot holds no bee.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Gifted flag of the occupant.
    #[must_use]
    pub const fn is_gifted(&self) -> bool {
        self.gifted
    }

    /// Level of the occupant.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Returns a copy with the gifted flag replaced; empty slots are returned unchanged.
    #[must_use]
    pub fn with_gifted(self, gifted: bool) -> Self {
        if self.is_empty() {
            return self;
        }
        Self { gifted, ..self }
    }

    /// Returns a copy with the level replaced; empty slots are returned unchanged.
    #[must_use]
    pub fn with_level(self, level: Level) -> Self {
        if self.is_empty() {
            return self;
        }
        Self { level, ..self }
    }
}

impl Default for HiveSlot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Immutable copy of all hive slots at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    slots: [HiveSlot; HIVE_SLOT_COUNT],
}

impl LayoutSnapshot {
    /// Creates a layout where every slot is empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slots: std::array::from_fn(|_| HiveSlot::empty()),
        }
    }

    /// Creates a layout from an explicit slot array.
    #[must_use]
    pub const fn from_slots(slots: [HiveSlot; HIVE_SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// Slot stored at the provided index.
    #[must_use]
    pub fn slot(&self, index: SlotIndex) -> &HiveSlot {
        &self.slots[index.get()]
    }

    /// All slots in hive order.
    #[must_use]
    pub fn slots(&self) -> &[HiveSlot] {
        &self.slots
    }

    /// Iterates slots alongside their indices.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &HiveSlot)> {
        SlotIndex::all().zip(self.slots.iter())
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Reports whether every slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(HiveSlot::is_empty)
    }

    /// Returns a copy with one slot replaced.
    #[must_use]
    pub fn with_slot(mut self, index: SlotIndex, slot: HiveSlot) -> Self {
        self.slots[index.get()] = slot;
        self
    }

    /// Returns a copy with two slots exchanged.
    #[must_use]
    pub fn swapped(mut self, first: SlotIndex, second: SlotIndex) -> Self {
        self.slots.swap(first.get(), second.get());
        self
    }
}

impl Default for LayoutSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Rarity tier of a bee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeeRarity {
    /// Common bees.
    Common,
    /// Rare bees.
    Rare,
    /// Epic bees.
    Epic,
    /// Legendary bees.
    Legendary,
    /// Mythic bees.
    Mythic,
    /// Event bees.
    Event,
}

impl BeeRarity {
    /// Every rarity in ascending order.
    pub const ALL: [BeeRarity; 6] = [
        Self::Common,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
        Self::Mythic,
        Self::Event,
    ];

    /// Lowercase name used in data files and queries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
            Self::Mythic => "mythic",
            Self::Event => "event",
        }
    }

    /// Parses a rarity name case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rarity| rarity.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

/// Colour affinity of a bee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeeColor {
    /// Red bees.
    Red,
    /// Blue bees.
    Blue,
    /// Colorless bees.
    Colorless,
}

impl BeeColor {
    /// Every colour in display order.
    pub const ALL: [BeeColor; 3] = [Self::Red, Self::Blue, Self::Colorless];

    /// Lowercase name used in data files and queries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Colorless => "colorless",
        }
    }

    /// Parses a colour name case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

/// Identifier of a saved hive configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigId(String);

impl ConfigId {
    /// Creates a new identifier wrapper.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrows the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User-named hive layout persisted independently of the live session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedConfig {
    /// Identifier assigned when the configuration was saved.
    pub id: ConfigId,
    /// Name chosen by the user.
    pub name: String,
    /// Layout token produced by the layout codec.
    pub serialized_layout: String,
    /// Unix timestamp in milliseconds recorded at save time.
    pub created_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(index: usize) -> SlotIndex {
        SlotIndex::new(index).expect("index within hive")
    }

    #[test]
    fn slot_index_rejects_positions_outside_hive() {
        assert!(SlotIndex::new(0).is_some());
        assert!(SlotIndex::new(HIVE_SLOT_COUNT - 1).is_some());
        assert!(SlotIndex::new(HIVE_SLOT_COUNT).is_none());
        assert_eq!(SlotIndex::all().count(), HIVE_SLOT_COUNT);
    }

    #[test]
    fn level_clamps_into_supported_range() {
        assert_eq!(Level::clamped(0), Level::MIN);
        assert_eq!(Level::clamped(-40), Level::MIN);
        assert_eq!(Level::clamped(99), Level::MAX);
        assert_eq!(Level::clamped(17).get(), 17);
        assert_eq!(Level::MAX.increment(), Level::MAX);
        assert_eq!(Level::MIN.decrement(), Level::MIN);
        assert_eq!(Level::default().get(), 12);
    }

    #[test]
    fn empty_slots_ignore_flag_updates() {
        let empty = HiveSlot::empty();
        assert_eq!(empty.clone().with_gifted(true), empty);
        assert_eq!(empty.clone().with_level(Level::MAX), empty);
    }

    #[test]
    fn swapped_exchanges_slot_contents() {
        let bee = HiveSlot::occupied(BeeSlug::new("basic-bee"), true, Level::clamped(7));
        let layout = LayoutSnapshot::empty()
            .with_slot(slot(3), bee.clone())
            .swapped(slot(3), slot(9));

        assert!(layout.slot(slot(3)).is_empty());
        assert_eq!(layout.slot(slot(9)), &bee);
        assert_eq!(layout.occupied_count(), 1);
    }

    #[test]
    fn rarity_and_color_names_parse_case_insensitively() {
        assert_eq!(BeeRarity::from_name("Mythic"), Some(BeeRarity::Mythic));
        assert_eq!(BeeColor::from_name(" BLUE "), Some(BeeColor::Blue));
        assert_eq!(BeeRarity::from_name("ultra"), None);
    }

    #[test]
    fn history_clear_is_the_only_event_that_keeps_layout() {
        assert!(!Event::HistoryCleared.changes_layout());
        assert!(Event::HiveCleared.changes_layout());
        assert!(Event::Undone.changes_layout());
    }

    #[test]
    fn layout_snapshot_round_trips_through_bincode() {
        let layout = LayoutSnapshot::empty().with_slot(
            slot(12),
            HiveSlot::occupied(BeeSlug::new("vicious-bee"), true, Level::MAX),
        );
        let bytes = bincode::serialize(&layout).expect("serialize");
        let restored: LayoutSnapshot = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, layout);
    }
}
