use alloc::vec::Vec;

use crate::{CategoryIndex, ItemState, PageIndicator};

/// A snapshot of one category for a rendering layer.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategorySnapshot {
    pub category: CategoryIndex,
    pub active_index: Option<usize>,
    pub transitioning: bool,
    pub states: Vec<ItemState>,
    pub page: Option<PageIndicator>,
}
