use alloc::sync::Arc;

use crate::{CategoryIndex, PageIndicator};

/// Default duration of a card transition.
pub const DEFAULT_TRANSITION_MS: u64 = 500;

/// A callback fired after a transition completes and the category's page indicator was updated.
pub type OnPageChangeCallback = Arc<dyn Fn(CategoryIndex, &PageIndicator) + Send + Sync>;

/// Configuration for [`crate::CarouselController`].
pub struct CarouselOptions {
    /// How long a transition stays in flight before the incoming item becomes active.
    pub transition_duration_ms: u64,

    /// Optional hook for hosts that render the page indicator themselves.
    ///
    /// Only fires for categories registered with an indicator.
    pub on_page_change: Option<OnPageChangeCallback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            transition_duration_ms: self.transition_duration_ms,
            on_page_change: self.on_page_change.clone(),
        }
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("transition_duration_ms", &self.transition_duration_ms)
            .field("on_page_change", &self.on_page_change.is_some())
            .finish()
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            transition_duration_ms: DEFAULT_TRANSITION_MS,
            on_page_change: None,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transition_duration_ms(mut self, duration_ms: u64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    pub fn with_on_page_change(
        mut self,
        f: Option<impl Fn(CategoryIndex, &PageIndicator) + Send + Sync + 'static>,
    ) -> Self {
        self.on_page_change = f.map(|f| Arc::new(f) as OnPageChangeCallback);
        self
    }
}
