use alloc::vec::Vec;

use showcase::{
    CarouselController, CarouselError, CarouselOptions, CategoryIndex, Direction, ItemId,
    Transition,
};

use crate::{
    Controls, Cursor, Easing, InputAdapter, InputOptions, InputResponse, Navbar, NavbarTheme, Rgb,
    ScrollBehavior, ScrollRequest, ScrollTween, WheelEvent, anchor_scroll_target,
};

/// Default duration of an animated anchor scroll.
pub const DEFAULT_SCROLL_DURATION_MS: u64 = 400;

/// Configuration for [`Page`].
#[derive(Clone, Debug)]
pub struct PageOptions {
    pub carousel: CarouselOptions,
    pub input: InputOptions,
    pub navbar: NavbarTheme,
    /// Height of the fixed navbar; anchor targets land just below it.
    pub navbar_height: u64,
    /// How anchor scrolls are performed.
    ///
    /// With `Smooth`, the page animates the offset itself and reports it from [`Page::tick`].
    pub scroll_behavior: ScrollBehavior,
    pub scroll_duration_ms: u64,
    pub scroll_easing: Easing,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            carousel: CarouselOptions::default(),
            input: InputOptions::default(),
            navbar: NavbarTheme::default(),
            navbar_height: 0,
            scroll_behavior: ScrollBehavior::Smooth,
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            scroll_easing: Easing::default(),
        }
    }
}

impl PageOptions {
    pub fn with_carousel(mut self, carousel: CarouselOptions) -> Self {
        self.carousel = carousel;
        self
    }

    pub fn with_input(mut self, input: InputOptions) -> Self {
        self.input = input;
        self
    }

    pub fn with_navbar(mut self, navbar: NavbarTheme) -> Self {
        self.navbar = navbar;
        self
    }

    pub fn with_navbar_height(mut self, height: u64) -> Self {
        self.navbar_height = height;
        self
    }

    pub fn with_scroll_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.scroll_behavior = behavior;
        self
    }

    pub fn with_scroll_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.scroll_duration_ms = duration_ms;
        self.scroll_easing = easing;
        self
    }
}

/// Output of [`Page::tick`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageFrame {
    /// Page offset the host should apply, while an anchor scroll is animating.
    pub scroll_offset: Option<u64>,
    /// Navbar background for `scroll_offset`, when present.
    pub navbar: Option<Rgb>,
    /// Carousel transitions that completed during this tick.
    pub completed: Vec<Transition>,
}

/// A framework-neutral controller for the whole page: anchor scrolling, navbar recoloring, and
/// the showcase carousel with its input handling.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `on_*` methods when UI events occur
/// - `tick(now_ms)` each frame/timer tick, to finish carousel transitions and sample scroll
///   animations
#[derive(Clone, Debug)]
pub struct Page<K = ItemId> {
    carousel: CarouselController<K>,
    input: InputAdapter,
    navbar: Navbar,
    scroll_offset: u64,
    tween: Option<ScrollTween>,
    navbar_height: u64,
    scroll_behavior: ScrollBehavior,
    scroll_duration_ms: u64,
    scroll_easing: Easing,
}

impl<K> Default for Page<K> {
    fn default() -> Self {
        Self::new(PageOptions::default())
    }
}

impl<K> Page<K> {
    pub fn new(options: PageOptions) -> Self {
        Self {
            carousel: CarouselController::new(options.carousel),
            input: InputAdapter::new(options.input),
            navbar: Navbar::new(options.navbar),
            scroll_offset: 0,
            tween: None,
            navbar_height: options.navbar_height,
            scroll_behavior: options.scroll_behavior,
            scroll_duration_ms: options.scroll_duration_ms,
            scroll_easing: options.scroll_easing,
        }
    }

    pub fn carousel(&self) -> &CarouselController<K> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CarouselController<K> {
        &mut self.carousel
    }

    pub fn input(&self) -> &InputAdapter {
        &self.input
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_navbar_height(&mut self, height: u64) {
        self.navbar_height = height;
    }

    /// Registers a showcase category and the controls it has.
    pub fn register_category(
        &mut self,
        category: CategoryIndex,
        keys: impl IntoIterator<Item = K>,
        controls: Controls,
    ) -> Result<(), CarouselError> {
        self.carousel.register_category(category, keys)?;
        self.input.bind_controls(category, controls);
        Ok(())
    }

    pub fn cursor(&self, category: CategoryIndex) -> Cursor {
        self.input.cursor(category)
    }

    pub fn is_scroll_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_scroll_animation(&mut self) {
        self.tween = None;
    }

    /// Handles a click on an in-page link.
    ///
    /// Returns the scroll the host should perform, or `None` when the link has no target section.
    /// With smooth scrolling the page also starts animating towards the target.
    pub fn on_anchor_click(
        &mut self,
        href: &str,
        now_ms: u64,
        section_top: impl FnMut(&str) -> Option<u64>,
    ) -> Option<ScrollRequest> {
        let Some(top) = anchor_scroll_target(href, self.navbar_height, section_top) else {
            atrace!(href, "on_anchor_click: no target section");
            return None;
        };
        adebug!(href, top, "on_anchor_click");

        if self.scroll_behavior == ScrollBehavior::Smooth {
            let tween = match self.tween {
                Some(t) => t.redirect(now_ms, top, self.scroll_duration_ms),
                None => ScrollTween::new(
                    self.scroll_offset,
                    top,
                    now_ms,
                    self.scroll_duration_ms,
                    self.scroll_easing,
                ),
            };
            self.tween = Some(tween);
        }
        Some(ScrollRequest {
            top,
            behavior: self.scroll_behavior,
        })
    }

    /// Call this when the host reports a page scroll offset. Returns the navbar background.
    pub fn on_scroll(&mut self, scroll_top: u64) -> Rgb {
        self.scroll_offset = scroll_top;
        self.navbar.on_scroll(scroll_top)
    }

    pub fn on_wheel(
        &mut self,
        category: CategoryIndex,
        event: WheelEvent,
        now_ms: u64,
    ) -> Result<InputResponse, CarouselError> {
        self.input
            .on_wheel(&mut self.carousel, category, event, now_ms)
    }

    pub fn on_pointer_down(&mut self, category: CategoryIndex, x: f64) {
        self.input.on_pointer_down(category, x);
    }

    pub fn on_pointer_up(
        &mut self,
        category: CategoryIndex,
        x: f64,
        now_ms: u64,
    ) -> Result<InputResponse, CarouselError> {
        self.input
            .on_pointer_up(&mut self.carousel, category, x, now_ms)
    }

    pub fn on_button(
        &mut self,
        category: CategoryIndex,
        direction: Direction,
        now_ms: u64,
    ) -> Result<InputResponse, CarouselError> {
        self.input
            .on_button(&mut self.carousel, category, direction, now_ms)
    }

    /// Advances the page.
    ///
    /// - Completes carousel transitions that are due.
    /// - If an anchor scroll is animating, samples it and reports the new offset.
    pub fn tick(&mut self, now_ms: u64) -> PageFrame {
        let completed = self.carousel.tick(now_ms);

        let Some(tween) = self.tween else {
            return PageFrame {
                completed,
                ..PageFrame::default()
            };
        };

        let offset = tween.offset_at(now_ms);
        if tween.is_finished(now_ms) {
            self.tween = None;
        }
        let navbar = self.on_scroll(offset);
        PageFrame {
            scroll_offset: Some(offset),
            navbar: Some(navbar),
            completed,
        }
    }

    /// Earliest time at which [`Page::tick`] has work to do.
    ///
    /// While a scroll animation runs this is `now_ms` (tick every frame).
    pub fn next_deadline(&self, now_ms: u64) -> Option<u64> {
        if self.tween.is_some() {
            return Some(now_ms);
        }
        self.carousel.next_deadline()
    }
}
