/// How the host should perform a scroll request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// A page scroll the host should perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    /// Target page offset, measured from the top of the document.
    pub top: u64,
    pub behavior: ScrollBehavior,
}

/// Extracts the section id from an in-page link (`"#about"` → `"about"`).
///
/// Returns `None` for links that do not start with `#` or have an empty fragment.
pub fn anchor_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Resolves an in-page link to the scroll offset that puts its section just below the navbar.
///
/// `section_top` maps a section id to that section's top offset in the *current* document. Links
/// whose section does not exist resolve to `None`, and the host should not scroll.
pub fn anchor_scroll_target(
    href: &str,
    navbar_height: u64,
    mut section_top: impl FnMut(&str) -> Option<u64>,
) -> Option<u64> {
    let id = anchor_id(href)?;
    let top = section_top(id)?;
    Some(top.saturating_sub(navbar_height))
}
