//! Scroll-driven navigation state: which section is current, and the
//! scroll thresholds for navbar styling and the back-to-top button.
//!
//! Section geometry is measured from live layout by the caller every
//! frame, never cached here.

/// How far above a section's top it already counts as current.
pub const ACTIVE_SECTION_OFFSET: f32 = 150.0;
/// Scroll depth past which the navbar switches to its condensed look.
pub const NAVBAR_CONDENSE_THRESHOLD: f32 = 100.0;
/// Scroll depth past which the back-to-top button shows.
pub const SCROLL_TOP_THRESHOLD: f32 = 500.0;
/// Allowance for the fixed navbar when jumping to a section.
pub const NAV_CLICK_OFFSET: f32 = 80.0;

/// One page section as laid out this frame: content-relative top and
/// height in pixels.
#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Picks the section the given scroll position is inside of.
///
/// A section is current while `scroll_y` lies in
/// `[top - offset, top - offset + height)`. When several windows
/// overlap, the last section in document order wins.
pub fn active_section(sections: &[Section], scroll_y: f32) -> Option<&str> {
    let mut current = None;
    for s in sections {
        let window_top = s.top - ACTIVE_SECTION_OFFSET;
        if scroll_y >= window_top && scroll_y < window_top + s.height {
            current = Some(s.id.as_str());
        }
    }
    current
}

pub fn navbar_condensed(scroll_y: f32) -> bool {
    scroll_y > NAVBAR_CONDENSE_THRESHOLD
}

pub fn scroll_top_visible(scroll_y: f32) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Scroll target for a nav click on the given section top.
pub fn click_target(section_top: f32) -> f32 {
    (section_top - NAV_CLICK_OFFSET).max(0.0)
}
