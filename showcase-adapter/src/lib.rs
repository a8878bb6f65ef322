//! Adapter utilities for the `showcase` crate.
//!
//! The `showcase` crate is UI-agnostic and owns the carousel state machine. This crate provides
//! the small, framework-neutral pieces a page host needs around it:
//!
//! - Input normalization: wheel (with cooldown), pointer drag (with a distance threshold), and
//!   prev/next buttons, all funneled into the carousel
//! - In-page anchor resolution and eased scroll animation
//! - Navbar recoloring keyed on the page scroll offset
//! - [`Page`], which bundles all of the above behind `on_*` event methods and `tick(now_ms)`
//!
//! This crate is intentionally framework-agnostic (no DOM/web-sys bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod input;
mod navbar;
mod page;
mod scroll;
mod tween;


pub use input::{
    Controls, Cursor, DEFAULT_DRAG_THRESHOLD, DEFAULT_WHEEL_COOLDOWN_MS, InputAdapter,
    InputOptions, InputResponse, WheelEvent,
};
pub use navbar::{DEFAULT_NAVBAR_THRESHOLD, Navbar, NavbarColor, NavbarTheme, Rgb};
pub use page::{DEFAULT_SCROLL_DURATION_MS, Page, PageFrame, PageOptions};
pub use scroll::{ScrollBehavior, ScrollRequest, anchor_id, anchor_scroll_target};
pub use tween::{Easing, ScrollTween};
