#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Bounded undo/redo history over arbitrary state values.
//!
//! The history owns the current value together with a capped stack of past
//! values and an unbounded stack of undone values. Transitions are plain
//! methods on the explicit state; undo and redo never re-enter the
//! recording path.

use std::collections::VecDeque;

/// Number of past states retained when no explicit cap is configured.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Linear undo/redo history with FIFO eviction of the oldest past entry.
#[derive(Clone, Debug)]
pub struct History<T> {
    current: T,
    past: VecDeque<T>,
    future: Vec<T>,
    max_history: usize,
}

impl<T> History<T>
where
    T: Clone + PartialEq,
{
    /// Creates a history seeded with `initial` and the default cap.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self::with_max_history(initial, DEFAULT_MAX_HISTORY)
    }

    /// Creates a history that retains at most `max_history` past states.
    ///
    /// A cap of zero disables undo entirely while still tracking the current value.
    #[must_use]
    pub fn with_max_history(initial: T, max_history: usize) -> Self {
        Self {
            current: initial,
            past: VecDeque::with_capacity(max_history.min(DEFAULT_MAX_HISTORY)),
            future: Vec::new(),
            max_history,
        }
    }

    /// Current value.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Configured cap on the number of past states.
    #[must_use]
    pub const fn max_history(&self) -> usize {
        self.max_history
    }

    /// Past states ordered oldest first.
    pub fn past(&self) -> impl ExactSizeIterator<Item = &T> {
        self.past.iter()
    }

    /// Undone states ordered oldest undo first; the next redo target is last.
    #[must_use]
    pub fn future(&self) -> &[T] {
        &self.future
    }

    /// Reports whether [`History::undo`] would change the current value.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Reports whether [`History::redo`] would change the current value.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Computes the next value from the current one and records it.
    ///
    /// Returns `false` without touching either stack when the computed value
    /// equals the current one.
    pub fn set_state<F>(&mut self, update: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        let next = update(&self.current);
        self.set(next)
    }

    /// Replaces the current value and records the previous one.
    ///
    /// Any undone states are discarded; branching history is not retained.
    pub fn set(&mut self, next: T) -> bool {
        if next == self.current {
            return false;
        }

        let previous = std::mem::replace(&mut self.current, next);
        self.push_past(previous);
        self.future.clear();
        true
    }

    /// Steps back to the most recent past state.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };

        let undone = std::mem::replace(&mut self.current, previous);
        self.future.push(undone);
        true
    }

    /// Steps forward to the most recently undone state.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };

        let previous = std::mem::replace(&mut self.current, next);
        self.push_past(previous);
        true
    }

    /// Drops both stacks, keeping the current value.
    pub fn clear_history(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    fn push_past(&mut self, value: T) {
        if self.max_history == 0 {
            return;
        }

        while self.past.len() >= self.max_history {
            if self.past.pop_front().is_some() {
                log::trace!("history cap {} reached, evicted oldest entry", self.max_history);
            }
        }
        self.past.push_back(value);
    }
}

impl<T> Default for History<T>
where
    T: Clone + PartialEq + Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}
