/// Identifies a showcase category within one controller.
pub type CategoryIndex = usize;

/// Default item key type.
pub type ItemId = u64;

/// Navigation direction through a category's circular item order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    pub fn reverse(self) -> Self {
        match self {
            Self::Next => Self::Prev,
            Self::Prev => Self::Next,
        }
    }
}

/// Visual state of a single showcase item.
///
/// Exactly one item per non-empty category is `Active` while the category is idle. During a
/// transition one item is `Exiting*`, one is `Entering*`, and every other item is `Stacked`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemState {
    Active,
    Stacked,
    EnteringFromRight,
    EnteringFromLeft,
    ExitingLeft,
    ExitingRight,
}

impl ItemState {
    /// The outgoing state for a transition in `direction`.
    pub fn exiting(direction: Direction) -> Self {
        match direction {
            Direction::Next => Self::ExitingLeft,
            Direction::Prev => Self::ExitingRight,
        }
    }

    /// The incoming state for a transition in `direction`.
    pub fn entering(direction: Direction) -> Self {
        match direction {
            Direction::Next => Self::EnteringFromRight,
            Direction::Prev => Self::EnteringFromLeft,
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn is_stacked(self) -> bool {
        matches!(self, Self::Stacked)
    }

    pub fn is_entering(self) -> bool {
        matches!(self, Self::EnteringFromRight | Self::EnteringFromLeft)
    }

    pub fn is_exiting(self) -> bool {
        matches!(self, Self::ExitingLeft | Self::ExitingRight)
    }

    /// The class name a rendering layer styles this state with.
    ///
    /// Both sides of a transition share the `sliding-*` classes: the item leaving to the left and
    /// the item arriving from the left are both `sliding-left`.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Stacked => "stacked",
            Self::ExitingLeft | Self::EnteringFromLeft => "sliding-left",
            Self::ExitingRight | Self::EnteringFromRight => "sliding-right",
        }
    }
}

/// A transition that was started by [`crate::CarouselController::navigate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub category: CategoryIndex,
    pub direction: Direction,
    pub from: usize,
    pub to: usize,
    /// Time at which the transition completes.
    pub due_ms: u64,
}
