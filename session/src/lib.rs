#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative hive layout session for Hive Planner.
//!
//! The session is the only owner of the live layout. Every mutation arrives as
//! a [`Command`] through [`apply`], is recorded in the bounded undo/redo
//! history, and is confirmed with [`Event`] values. Commands that would leave
//! the layout unchanged are dropped without touching the history.

use hive_planner_core::{Command, Event, HiveSlot, LayoutSnapshot, Level, SlotIndex};
use hive_planner_system_history::{History, DEFAULT_MAX_HISTORY};

/// Represents the live hive layout together with its undo/redo history.
#[derive(Clone, Debug)]
pub struct HiveSession {
    history: History<LayoutSnapshot>,
}

impl HiveSession {
    /// Creates a session with an empty hive and the default history depth.
    #[must_use]
    pub fn new() -> Self {
        Self::with_layout(LayoutSnapshot::empty(), DEFAULT_MAX_HISTORY)
    }

    /// Creates a session starting from `layout` that keeps `max_history` undo steps.
    #[must_use]
    pub fn with_layout(layout: LayoutSnapshot, max_history: usize) -> Self {
        Self {
            history: History::with_max_history(layout, max_history),
        }
    }

    fn layout(&self) -> &LayoutSnapshot {
        self.history.current()
    }

    fn commit(&mut self, next: LayoutSnapshot) -> bool {
        let recorded = self.history.set(next);
        if recorded {
            log::debug!(
                "layout committed, {} bees placed, {} undo steps",
                self.layout().occupied_count(),
                self.history.past().len()
            );
        }
        recorded
    }
}

impl Default for HiveSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the session, emitting events for every change.
pub fn apply(session: &mut HiveSession, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::PlaceBee {
            bee,
            slot,
            gifted,
            level,
        } => {
            let next = session
                .layout()
                .clone()
                .with_slot(slot, HiveSlot::occupied(bee.clone(), gifted, level));
            if session.commit(next) {
                out_events.push(Event::BeePlaced { slot, bee });
            }
        }
        Command::MoveOrSwap { from, to } => {
            if from == to {
                return;
            }

            let target_occupied = !session.layout().slot(to).is_empty();
            let next = session.layout().clone().swapped(from, to);
            if session.commit(next) {
                if target_occupied {
                    out_events.push(Event::SlotsSwapped { from, to });
                } else {
                    out_events.push(Event::BeeMoved { from, to });
                }
            }
        }
        Command::RemoveBee { slot } => {
            let Some(bee) = session.layout().slot(slot).occupant().cloned() else {
                return;
            };

            let next = session.layout().clone().with_slot(slot, HiveSlot::empty());
            if session.commit(next) {
                out_events.push(Event::BeeRemoved { slot, bee });
            }
        }
        Command::ToggleGifted { slot } => {
            let current = session.layout().slot(slot);
            if current.is_empty() {
                return;
            }

            let gifted = !current.is_gifted();
            let toggled = current.clone().with_gifted(gifted);
            let next = session.layout().clone().with_slot(slot, toggled);
            if session.commit(next) {
                out_events.push(Event::GiftedToggled { slot, gifted });
            }
        }
        Command::ClearHive => {
            if session.commit(LayoutSnapshot::empty()) {
                out_events.push(Event::HiveCleared);
            }
        }
        Command::SetDefaultLevel { level } => {
            let stale = stale_level_slots(session.layout(), level);
            if stale.is_empty() {
                return;
            }

            let mut next = session.layout().clone();
            for &slot in &stale {
                let relevelled = next.slot(slot).clone().with_level(level);
                next = next.with_slot(slot, relevelled);
            }
            if session.commit(next) {
                out_events.push(Event::LevelsChanged {
                    level,
                    slots: stale,
                });
            }
        }
        Command::ImportLayout { layout } => {
            if session.commit(layout) {
                out_events.push(Event::LayoutImported);
            }
        }
        Command::Undo => {
            if session.history.undo() {
                out_events.push(Event::Undone);
            }
        }
        Command::Redo => {
            if session.history.redo() {
                out_events.push(Event::Redone);
            }
        }
        Command::ClearHistory => {
            if session.history.can_undo() || session.history.can_redo() {
                session.history.clear_history();
                out_events.push(Event::HistoryCleared);
            }
        }
    }
}

/// Occupied slots whose level differs from `level`.
fn stale_level_slots(layout: &LayoutSnapshot, level: Level) -> Vec<SlotIndex> {
    layout
        .iter()
        .filter(|(_, slot)| !slot.is_empty() && slot.level() != level)
        .map(|(index, _)| index)
        .collect()
}

/// Query functions that provide read-only access to the session state.
pub mod query {
    use super::HiveSession;
    use hive_planner_core::{HiveSlot, LayoutSnapshot, SlotIndex};

    /// Provides read-only access to the current layout.
    #[must_use]
    pub fn layout(session: &HiveSession) -> &LayoutSnapshot {
        session.history.current()
    }

    /// Provides read-only access to a single slot.
    #[must_use]
    pub fn slot(session: &HiveSession, index: SlotIndex) -> &HiveSlot {
        session.history.current().slot(index)
    }

    /// Reports whether an undo step is available.
    #[must_use]
    pub fn can_undo(session: &HiveSession) -> bool {
        session.history.can_undo()
    }

    /// Reports whether a redo step is available.
    #[must_use]
    pub fn can_redo(session: &HiveSession) -> bool {
        session.history.can_redo()
    }

    /// Number of undo and redo steps currently stored.
    #[must_use]
    pub fn history_depth(session: &HiveSession) -> HistoryDepth {
        HistoryDepth {
            undo: session.history.past().len(),
            redo: session.history.future().len(),
        }
    }

    /// Counts of stored undo and redo steps.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HistoryDepth {
        /// Steps available to undo.
        pub undo: usize,
        /// Steps available to redo.
        pub redo: usize,
    }
}
