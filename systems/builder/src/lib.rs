#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure builder system that turns hive gestures into layout commands.

use hive_planner_core::{BeeSlug, Command, Level, SlotIndex};

/// Flags applied to bees dragged in from the bee palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementDefaults {
    /// Whether newly placed bees are gifted.
    pub gifted: bool,
    /// Level assigned to newly placed bees and pushed to the whole hive.
    pub level: Level,
}

impl PlacementDefaults {
    /// Creates a new defaults descriptor with explicit field values.
    #[must_use]
    pub const fn new(gifted: bool, level: Level) -> Self {
        Self { gifted, level }
    }
}

impl Default for PlacementDefaults {
    fn default() -> Self {
        Self {
            gifted: false,
            level: Level::DEFAULT,
        }
    }
}

/// Origin of a drag gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragSource {
    /// A bee picked from the catalog palette.
    Palette(BeeSlug),
    /// The contents of an existing hive slot.
    Slot(SlotIndex),
}

/// Discrete gesture distilled from adapter-provided input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuilderInput {
    /// A drag ended over a hive slot.
    Drop {
        /// Where the drag started.
        source: DragSource,
        /// Slot the drag ended on.
        target: SlotIndex,
    },
    /// A slot was double-clicked.
    DoubleClick {
        /// Slot under the cursor.
        slot: SlotIndex,
    },
    /// A slot was right-clicked.
    RightClick {
        /// Slot under the cursor.
        slot: SlotIndex,
    },
    /// The level selector was set to an explicit value.
    SetLevel {
        /// Requested level.
        level: Level,
    },
    /// The level selector's plus button was pressed.
    IncrementLevel,
    /// The level selector's minus button was pressed.
    DecrementLevel,
    /// The gifted placement switch changed.
    SetGiftedMode {
        /// Whether newly placed bees should be gifted.
        gifted: bool,
    },
}

/// Builder system that translates gestures into layout commands.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    defaults: PlacementDefaults,
}

impl Builder {
    /// Creates a new builder system instance seeded with the provided defaults.
    #[must_use]
    pub const fn new(defaults: PlacementDefaults) -> Self {
        Self { defaults }
    }

    /// Flags currently applied to palette drops.
    #[must_use]
    pub const fn defaults(&self) -> PlacementDefaults {
        self.defaults
    }

    /// Consumes one gesture and emits the commands it implies.
    ///
    /// The `is_occupied` closure should mirror the session's slot query so the
    /// system can ignore clicks on empty slots.
    pub fn handle<F>(&mut self, input: BuilderInput, mut is_occupied: F, out: &mut Vec<Command>)
    where
        F: FnMut(SlotIndex) -> bool,
    {
        match input {
            BuilderInput::Drop {
                source: DragSource::Palette(bee),
                target,
            } => out.push(Command::PlaceBee {
                bee,
                slot: target,
                gifted: self.defaults.gifted,
                level: self.defaults.level,
            }),
            BuilderInput::Drop {
                source: DragSource::Slot(from),
                target,
            } => {
                if from != target {
                    out.push(Command::MoveOrSwap { from, to: target });
                }
            }
            BuilderInput::DoubleClick { slot } => {
                if is_occupied(slot) {
                    out.push(Command::RemoveBee { slot });
                }
            }
            BuilderInput::RightClick { slot } => {
                if is_occupied(slot) {
                    out.push(Command::ToggleGifted { slot });
                }
            }
            BuilderInput::SetLevel { level } => self.change_level(level, out),
            BuilderInput::IncrementLevel => self.change_level(self.defaults.level.increment(), out),
            BuilderInput::DecrementLevel => self.change_level(self.defaults.level.decrement(), out),
            BuilderInput::SetGiftedMode { gifted } => {
                self.defaults.gifted = gifted;
            }
        }
    }

    fn change_level(&mut self, level: Level, out: &mut Vec<Command>) {
        self.defaults.level = level;
        out.push(Command::SetDefaultLevel { level });
    }
}
