use alloc::string::{String, ToString};

/// Passive view of a category's position, shown to users as a 1-based page number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageIndicator {
    current: usize,
    total: usize,
}

impl PageIndicator {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    pub fn update(&mut self, current: usize, total: usize) {
        self.current = current;
        self.total = total;
    }

    /// 0-based index of the displayed item.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// 1-based page number.
    pub fn current_page(&self) -> usize {
        self.current.saturating_add(1)
    }

    pub fn total_pages(&self) -> usize {
        self.total
    }

    pub fn current_page_text(&self) -> String {
        self.current_page().to_string()
    }
}
