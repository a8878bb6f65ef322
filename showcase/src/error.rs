use core::fmt;

use crate::CategoryIndex;

/// Errors returned by [`crate::CarouselController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselError {
    /// No stack is registered under this category index.
    InvalidCategory { category: CategoryIndex },
    /// A stack is already registered under this category index.
    DuplicateCategory { category: CategoryIndex },
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCategory { category } => {
                write!(f, "category {category} is not registered")
            }
            Self::DuplicateCategory { category } => {
                write!(f, "category {category} is already registered")
            }
        }
    }
}

impl core::error::Error for CarouselError {}
