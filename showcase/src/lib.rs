//! A headless stacked-card carousel engine for category showcases.
//!
//! Each category holds a fixed, circular sequence of items. One item is active, the rest are
//! stacked behind it. Navigating swaps the active item through a fixed-duration transition during
//! which the outgoing item slides out and the incoming item slides in.
//!
//! For input handling (wheel, drag, buttons), smooth anchor scrolling, and navbar recoloring, see
//! the `showcase-adapter` crate.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - item keys per category at startup
//! - a monotonic `now_ms` on every call that can start or finish a transition
//! - rendering of [`ItemState::class_name`] labels and [`PageIndicator`] text
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod error;
mod options;
mod page;
mod stack;
mod state;
mod timers;
mod types;

#[cfg(test)]
mod tests;

pub use controller::CarouselController;
pub use error::CarouselError;
pub use options::{CarouselOptions, DEFAULT_TRANSITION_MS, OnPageChangeCallback};
pub use page::PageIndicator;
pub use stack::ItemStack;
pub use state::CategorySnapshot;
pub use timers::{TaskHandle, Timers};
pub use types::{CategoryIndex, Direction, ItemId, ItemState, Transition};
