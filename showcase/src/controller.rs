use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::timers::{TaskHandle, Timers};
use crate::{
    CarouselError, CarouselOptions, CategoryIndex, CategorySnapshot, Direction, ItemId,
    ItemStack, ItemState, PageIndicator, Transition,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Transitioning {
        transition: Transition,
        task: TaskHandle,
    },
}

#[derive(Clone, Debug)]
struct Category<K> {
    stack: ItemStack<K>,
    phase: Phase,
    indicator: Option<PageIndicator>,
}

/// Drives stacked-card transitions for every registered category.
///
/// The controller is headless and clock-agnostic. Hosts call [`CarouselController::next`] /
/// [`CarouselController::prev`] (directly or through an input adapter) and [`CarouselController::tick`]
/// with a monotonic `now_ms` whenever time advances. [`CarouselController::next_deadline`] tells
/// a host when the next tick is needed.
///
/// Each category runs its own `Idle -> Transitioning -> Idle` cycle. While a category is
/// transitioning, further navigation requests for it are dropped. A started transition is never
/// cancelled: it completes on the first tick at or after its deadline.
#[derive(Clone, Debug)]
pub struct CarouselController<K = ItemId> {
    options: CarouselOptions,
    categories: BTreeMap<CategoryIndex, Category<K>>,
    timers: Timers<CategoryIndex>,
}

impl<K> Default for CarouselController<K> {
    fn default() -> Self {
        Self::new(CarouselOptions::default())
    }
}

impl<K> CarouselController<K> {
    pub fn new(options: CarouselOptions) -> Self {
        sdebug!(
            transition_duration_ms = options.transition_duration_ms,
            "CarouselController::new"
        );
        Self {
            options,
            categories: BTreeMap::new(),
            timers: Timers::new(),
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Registers a category with a page indicator.
    pub fn register_category(
        &mut self,
        category: CategoryIndex,
        keys: impl IntoIterator<Item = K>,
    ) -> Result<(), CarouselError> {
        self.register_category_with(category, keys, true)
    }

    /// Registers a category. The first item starts active.
    pub fn register_category_with(
        &mut self,
        category: CategoryIndex,
        keys: impl IntoIterator<Item = K>,
        has_indicator: bool,
    ) -> Result<(), CarouselError> {
        if self.categories.contains_key(&category) {
            swarn!(category, "register_category: duplicate category");
            return Err(CarouselError::DuplicateCategory { category });
        }
        let stack = ItemStack::new(keys);
        let indicator = has_indicator.then(|| PageIndicator::new(0, stack.len()));
        sdebug!(category, items = stack.len(), has_indicator, "register_category");
        self.categories.insert(
            category,
            Category {
                stack,
                phase: Phase::Idle,
                indicator,
            },
        );
        Ok(())
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn category_indices(&self) -> impl Iterator<Item = CategoryIndex> + '_ {
        self.categories.keys().copied()
    }

    fn category(&self, category: CategoryIndex) -> Result<&Category<K>, CarouselError> {
        self.categories.get(&category).ok_or_else(|| {
            swarn!(category, "unregistered category");
            CarouselError::InvalidCategory { category }
        })
    }

    pub fn stack(&self, category: CategoryIndex) -> Result<&ItemStack<K>, CarouselError> {
        Ok(&self.category(category)?.stack)
    }

    /// Position of the committed active item (`None` for an empty category).
    pub fn active_index(&self, category: CategoryIndex) -> Result<Option<usize>, CarouselError> {
        Ok(self.category(category)?.stack.active_index())
    }

    /// Computes the `(from, to)` pair a navigation would use, without starting it.
    pub fn advance(
        &self,
        category: CategoryIndex,
        direction: Direction,
    ) -> Result<Option<(usize, usize)>, CarouselError> {
        Ok(self.category(category)?.stack.advance(direction))
    }

    pub fn is_transitioning(&self, category: CategoryIndex) -> Result<bool, CarouselError> {
        Ok(matches!(
            self.category(category)?.phase,
            Phase::Transitioning { .. }
        ))
    }

    /// The in-flight transition for `category`, if any.
    pub fn transition(&self, category: CategoryIndex) -> Result<Option<Transition>, CarouselError> {
        Ok(match self.category(category)?.phase {
            Phase::Idle => None,
            Phase::Transitioning { transition, .. } => Some(transition),
        })
    }

    pub fn item_state(
        &self,
        category: CategoryIndex,
        index: usize,
    ) -> Result<Option<ItemState>, CarouselError> {
        Ok(self.category(category)?.stack.state(index))
    }

    pub fn item_states(&self, category: CategoryIndex) -> Result<&[ItemState], CarouselError> {
        Ok(self.category(category)?.stack.states())
    }

    pub fn page_indicator(
        &self,
        category: CategoryIndex,
    ) -> Result<Option<&PageIndicator>, CarouselError> {
        Ok(self.category(category)?.indicator.as_ref())
    }

    /// Earliest pending completion deadline across all categories.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn has_pending_transitions(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn next(
        &mut self,
        category: CategoryIndex,
        now_ms: u64,
    ) -> Result<Option<Transition>, CarouselError> {
        self.navigate(category, Direction::Next, now_ms)
    }

    pub fn prev(
        &mut self,
        category: CategoryIndex,
        now_ms: u64,
    ) -> Result<Option<Transition>, CarouselError> {
        self.navigate(category, Direction::Prev, now_ms)
    }

    /// Starts a transition in `direction`.
    ///
    /// Returns `Ok(None)` when the request is dropped: the category is already transitioning or
    /// has fewer than two items.
    pub fn navigate(
        &mut self,
        category: CategoryIndex,
        direction: Direction,
        now_ms: u64,
    ) -> Result<Option<Transition>, CarouselError> {
        let due_ms = now_ms.saturating_add(self.options.transition_duration_ms);
        let Some(entry) = self.categories.get_mut(&category) else {
            swarn!(category, ?direction, "navigate: unregistered category");
            return Err(CarouselError::InvalidCategory { category });
        };

        if let Phase::Transitioning { .. } = entry.phase {
            strace!(category, ?direction, "navigate: dropped, transition in flight");
            return Ok(None);
        }

        let Some((from, to)) = entry.stack.advance(direction) else {
            strace!(category, ?direction, "navigate: dropped, empty category");
            return Ok(None);
        };
        if from == to {
            strace!(category, ?direction, "navigate: dropped, single item");
            return Ok(None);
        }

        entry.stack.begin(from, to, direction);
        let transition = Transition {
            category,
            direction,
            from,
            to,
            due_ms,
        };
        let task = self.timers.schedule(due_ms, category);
        entry.phase = Phase::Transitioning { transition, task };
        sdebug!(category, ?direction, from, to, due_ms, "transition started");
        Ok(Some(transition))
    }

    /// Completes every transition whose deadline is at or before `now_ms`.
    ///
    /// Returns the completed transitions in deadline order.
    pub fn tick(&mut self, now_ms: u64) -> Vec<Transition> {
        let due = self.timers.take_due(now_ms);
        let mut completed = Vec::with_capacity(due.len());
        for category in due {
            if let Some(transition) = self.complete(category) {
                completed.push(transition);
            }
        }
        completed
    }

    fn complete(&mut self, category: CategoryIndex) -> Option<Transition> {
        let entry = self.categories.get_mut(&category)?;
        let Phase::Transitioning { transition, task } = entry.phase else {
            debug_assert!(false, "timer fired for idle category {category}");
            return None;
        };
        debug_assert!(!self.timers.is_pending(task));

        entry.stack.finish(transition.from, transition.to);
        entry.phase = Phase::Idle;
        let total = entry.stack.len();
        if let Some(indicator) = entry.indicator.as_mut() {
            indicator.update(transition.to, total);
            if let Some(cb) = &self.options.on_page_change {
                cb(category, indicator);
            }
        }
        sdebug!(
            category,
            from = transition.from,
            to = transition.to,
            "transition finished"
        );
        Some(transition)
    }

    pub fn snapshot(&self, category: CategoryIndex) -> Result<CategorySnapshot, CarouselError> {
        let entry = self.category(category)?;
        Ok(CategorySnapshot {
            category,
            active_index: entry.stack.active_index(),
            transitioning: matches!(entry.phase, Phase::Transitioning { .. }),
            states: entry.stack.states().to_vec(),
            page: entry.indicator,
        })
    }

    pub fn snapshots(&self) -> Vec<CategorySnapshot> {
        self.categories
            .keys()
            .filter_map(|&category| self.snapshot(category).ok())
            .collect()
    }
}
