use alloc::collections::BTreeMap;

use showcase::{CarouselController, CarouselError, CategoryIndex, Direction, Transition};

/// Default cooldown after a handled wheel gesture.
///
/// Slightly longer than the default transition so a burst of wheel events maps to one step.
pub const DEFAULT_WHEEL_COOLDOWN_MS: u64 = 550;

/// Default minimum horizontal pointer travel for a drag to count as a swipe.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 50.0;

/// Thresholds and debounce windows for [`InputAdapter`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputOptions {
    pub wheel_cooldown_ms: u64,
    /// Drags must travel strictly more than this.
    pub drag_threshold: f64,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            wheel_cooldown_ms: DEFAULT_WHEEL_COOLDOWN_MS,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

impl InputOptions {
    pub fn with_wheel_cooldown_ms(mut self, cooldown_ms: u64) -> Self {
        self.wheel_cooldown_ms = cooldown_ms;
        self
    }

    pub fn with_drag_threshold(mut self, threshold: f64) -> Self {
        self.drag_threshold = threshold;
        self
    }
}

/// A raw wheel event as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelEvent {
    pub delta_x: f64,
    pub delta_y: f64,
    pub shift_key: bool,
}

impl WheelEvent {
    pub fn new(delta_x: f64, delta_y: f64, shift_key: bool) -> Self {
        Self {
            delta_x,
            delta_y,
            shift_key,
        }
    }

    /// Horizontal motion, or any motion while shift is held.
    pub fn is_horizontal(&self) -> bool {
        magnitude(self.delta_x) > magnitude(self.delta_y) || self.shift_key
    }

    /// Navigation direction encoded by the deltas (shift maps vertical motion onto the x axis).
    pub fn direction(&self) -> Option<Direction> {
        if self.delta_x > 0.0 || (self.shift_key && self.delta_y > 0.0) {
            Some(Direction::Next)
        } else if self.delta_x < 0.0 || (self.shift_key && self.delta_y < 0.0) {
            Some(Direction::Prev)
        } else {
            None
        }
    }
}

/// Which prev/next controls a category has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Controls {
    pub prev: bool,
    pub next: bool,
}

impl Controls {
    pub fn both() -> Self {
        Self {
            prev: true,
            next: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Next => self.next,
            Direction::Prev => self.prev,
        }
    }
}

/// Pointer cursor a host should show over a category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cursor {
    #[default]
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// What an input handler did with an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputResponse {
    /// The host should suppress the event's native behavior (e.g. page scrolling).
    pub prevent_default: bool,
    /// Direction sent to the controller, if any.
    pub dispatched: Option<Direction>,
    /// The transition the controller started. `None` when the controller dropped the request.
    pub transition: Option<Transition>,
}

impl InputResponse {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn is_ignored(&self) -> bool {
        !self.prevent_default && self.dispatched.is_none()
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct CategoryInput {
    wheel_ready_at_ms: Option<u64>,
    drag_start_x: Option<f64>,
    controls: Controls,
}

/// Turns wheel, drag, and button input into carousel navigation.
///
/// All gating state (wheel cooldown, drag origin, bound controls) is kept per category, so input
/// on one category never affects another. The carousel itself still decides whether a request is
/// accepted: a dispatched direction may be dropped if the category is mid-transition.
#[derive(Clone, Debug, Default)]
pub struct InputAdapter {
    options: InputOptions,
    categories: BTreeMap<CategoryIndex, CategoryInput>,
}

impl InputAdapter {
    pub fn new(options: InputOptions) -> Self {
        Self {
            options,
            categories: BTreeMap::new(),
        }
    }

    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: InputOptions) {
        self.options = options;
    }

    fn entry(&mut self, category: CategoryIndex) -> &mut CategoryInput {
        self.categories.entry(category).or_default()
    }

    pub fn bind_controls(&mut self, category: CategoryIndex, controls: Controls) {
        self.entry(category).controls = controls;
    }

    pub fn controls(&self, category: CategoryIndex) -> Controls {
        self.categories
            .get(&category)
            .map(|c| c.controls)
            .unwrap_or_default()
    }

    pub fn cursor(&self, category: CategoryIndex) -> Cursor {
        match self.categories.get(&category) {
            Some(CategoryInput {
                drag_start_x: Some(_),
                ..
            }) => Cursor::Grabbing,
            _ => Cursor::Grab,
        }
    }

    /// Whether wheel input for `category` is still inside its cooldown window.
    pub fn is_wheel_cooling(&self, category: CategoryIndex, now_ms: u64) -> bool {
        self.categories
            .get(&category)
            .and_then(|c| c.wheel_ready_at_ms)
            .is_some_and(|ready| now_ms < ready)
    }

    /// Handles a wheel event over `category`.
    ///
    /// Vertical-only motion without shift is left to the host. Horizontal motion is always
    /// consumed; it is dispatched unless the category's cooldown is running, in which case it is
    /// dropped.
    pub fn on_wheel<K>(
        &mut self,
        carousel: &mut CarouselController<K>,
        category: CategoryIndex,
        event: WheelEvent,
        now_ms: u64,
    ) -> Result<InputResponse, CarouselError> {
        carousel.stack(category)?;
        if !event.is_horizontal() {
            return Ok(InputResponse::ignored());
        }

        let mut response = InputResponse {
            prevent_default: true,
            ..InputResponse::default()
        };
        if self.is_wheel_cooling(category, now_ms) {
            atrace!(category, now_ms, "on_wheel: dropped during cooldown");
            return Ok(response);
        }

        if let Some(direction) = event.direction() {
            response.dispatched = Some(direction);
            response.transition = carousel.navigate(category, direction, now_ms)?;
        }
        let ready_at = now_ms.saturating_add(self.options.wheel_cooldown_ms);
        self.entry(category).wheel_ready_at_ms = Some(ready_at);
        adebug!(category, dispatched = ?response.dispatched, ready_at, "on_wheel");
        Ok(response)
    }

    /// Records the start of a drag over `category`.
    pub fn on_pointer_down(&mut self, category: CategoryIndex, x: f64) {
        atrace!(category, x, "on_pointer_down");
        self.entry(category).drag_start_x = Some(x);
    }

    /// Forgets an unfinished drag (e.g. the pointer left the category).
    pub fn on_pointer_cancel(&mut self, category: CategoryIndex) {
        if let Some(c) = self.categories.get_mut(&category) {
            c.drag_start_x = None;
        }
    }

    /// Finishes a drag over `category`.
    ///
    /// Dragging left reveals the next item, dragging right the previous one. Drags that travel no
    /// more than the threshold, or releases without a matching press, do nothing.
    pub fn on_pointer_up<K>(
        &mut self,
        carousel: &mut CarouselController<K>,
        category: CategoryIndex,
        x: f64,
        now_ms: u64,
    ) -> Result<InputResponse, CarouselError> {
        carousel.stack(category)?;
        let Some(start_x) = self.entry(category).drag_start_x.take() else {
            return Ok(InputResponse::ignored());
        };

        let delta_x = x - start_x;
        if magnitude(delta_x) <= self.options.drag_threshold {
            atrace!(category, delta_x, "on_pointer_up: below drag threshold");
            return Ok(InputResponse::ignored());
        }

        let direction = if delta_x < 0.0 {
            Direction::Next
        } else {
            Direction::Prev
        };
        let transition = carousel.navigate(category, direction, now_ms)?;
        adebug!(category, delta_x, ?direction, "on_pointer_up");
        Ok(InputResponse {
            prevent_default: false,
            dispatched: Some(direction),
            transition,
        })
    }

    /// Handles a click on a prev/next control bound to `category`.
    ///
    /// Clicks on controls the category does not have are ignored.
    pub fn on_button<K>(
        &mut self,
        carousel: &mut CarouselController<K>,
        category: CategoryIndex,
        direction: Direction,
        now_ms: u64,
    ) -> Result<InputResponse, CarouselError> {
        carousel.stack(category)?;
        if !self.controls(category).has(direction) {
            atrace!(category, ?direction, "on_button: control not bound");
            return Ok(InputResponse::ignored());
        }
        let transition = carousel.navigate(category, direction, now_ms)?;
        Ok(InputResponse {
            prevent_default: false,
            dispatched: Some(direction),
            transition,
        })
    }
}

// no_std-friendly `abs`.
fn magnitude(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}
