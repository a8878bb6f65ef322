use alloc::vec::Vec;

use crate::{Direction, ItemId, ItemState};

/// An ordered, circular sequence of showcase items with a single active member.
///
/// The order is fixed when the stack is created. The only mutations are
/// [`ItemStack::begin`] and [`ItemStack::finish`], which the controller calls at the start and
/// the end of a transition.
#[derive(Clone, Debug)]
pub struct ItemStack<K = ItemId> {
    keys: Vec<K>,
    states: Vec<ItemState>,
    // Committed position. Stays on the outgoing item until a transition finishes.
    active: usize,
}

impl<K> ItemStack<K> {
    /// Creates a stack where the first item is active and the rest are stacked.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        let keys: Vec<K> = keys.into_iter().collect();
        let states = (0..keys.len())
            .map(|i| {
                if i == 0 {
                    ItemState::Active
                } else {
                    ItemState::Stacked
                }
            })
            .collect();
        Self {
            keys,
            states,
            active: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Position of the committed active item, or `None` for an empty stack.
    pub fn active_index(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.active)
        }
    }

    pub fn key(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn state(&self, index: usize) -> Option<ItemState> {
        self.states.get(index).copied()
    }

    pub fn states(&self) -> &[ItemState] {
        &self.states
    }

    /// Computes `(from, to)` for a step in `direction`, wrapping around both ends.
    ///
    /// Pure: the stack is not modified. Returns `None` for an empty stack.
    pub fn advance(&self, direction: Direction) -> Option<(usize, usize)> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let from = self.active;
        let to = match direction {
            Direction::Next => (from + 1) % len,
            Direction::Prev => (from + len - 1) % len,
        };
        Some((from, to))
    }

    /// Marks the start of a transition: `from` starts exiting and `to` starts entering.
    pub fn begin(&mut self, from: usize, to: usize, direction: Direction) {
        debug_assert!(from < self.len() && to < self.len() && from != to);
        self.states[from] = ItemState::exiting(direction);
        self.states[to] = ItemState::entering(direction);
    }

    /// Completes a transition started with [`ItemStack::begin`].
    pub fn finish(&mut self, from: usize, to: usize) {
        debug_assert!(from < self.len() && to < self.len());
        self.states[from] = ItemState::Stacked;
        self.states[to] = ItemState::Active;
        self.active = to;
    }

    /// Returns `true` when the item states form a valid configuration.
    ///
    /// Valid configurations are: one `Active` item and the rest `Stacked`, or exactly one
    /// exiting item, exactly one entering item, and the rest `Stacked`. An empty stack is valid.
    pub fn check_invariants(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        let mut active = 0usize;
        let mut entering = 0usize;
        let mut exiting = 0usize;
        for state in &self.states {
            if state.is_active() {
                active += 1;
            } else if state.is_entering() {
                entering += 1;
            } else if state.is_exiting() {
                exiting += 1;
            }
        }
        match (active, entering, exiting) {
            (1, 0, 0) => self.states[self.active].is_active(),
            (0, 1, 1) => self.states[self.active].is_exiting(),
            _ => false,
        }
    }
}
