use core::fmt;

/// Scroll offset past which the navbar switches to its scrolled color.
pub const DEFAULT_NAVBAR_THRESHOLD: u64 = 100;

/// An opaque RGB color. Displays as a lowercase `#rrggbb` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Which of the two navbar backgrounds applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavbarColor {
    #[default]
    Top,
    Scrolled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavbarTheme {
    /// The navbar counts as scrolled when the offset is strictly greater than this.
    pub threshold: u64,
    pub top: Rgb,
    pub scrolled: Rgb,
}

impl Default for NavbarTheme {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_NAVBAR_THRESHOLD,
            top: Rgb(0x1a, 0x1a, 0x1a),
            scrolled: Rgb(0x0d, 0x0d, 0x0d),
        }
    }
}

impl NavbarTheme {
    pub fn color_for(&self, scroll_top: u64) -> NavbarColor {
        if scroll_top > self.threshold {
            NavbarColor::Scrolled
        } else {
            NavbarColor::Top
        }
    }

    pub fn rgb(&self, color: NavbarColor) -> Rgb {
        match color {
            NavbarColor::Top => self.top,
            NavbarColor::Scrolled => self.scrolled,
        }
    }
}

/// Tracks the page scroll offset and the navbar background derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navbar {
    theme: NavbarTheme,
    last_scroll_top: u64,
    color: NavbarColor,
}

impl Navbar {
    pub fn new(theme: NavbarTheme) -> Self {
        Self {
            theme,
            last_scroll_top: 0,
            color: theme.color_for(0),
        }
    }

    pub fn theme(&self) -> &NavbarTheme {
        &self.theme
    }

    pub fn last_scroll_top(&self) -> u64 {
        self.last_scroll_top
    }

    pub fn color(&self) -> NavbarColor {
        self.color
    }

    pub fn background(&self) -> Rgb {
        self.theme.rgb(self.color)
    }

    /// Records a new scroll offset and returns the background to apply.
    pub fn on_scroll(&mut self, scroll_top: u64) -> Rgb {
        self.last_scroll_top = scroll_top;
        self.color = self.theme.color_for(scroll_top);
        self.background()
    }
}
