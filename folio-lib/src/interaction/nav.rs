/// Class flipped on the nav menu while it is open
pub const NAV_ACTIVE_CLASS: &str = "active";

pub const NAV_LINK_SELECTOR: &str = ".nav-link";

/// In-page links handled by smooth scrolling
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";

/// Height of the fixed header, in pixels
pub const HEADER_OFFSET: f64 = 80.0;

/// Where a click landed, relative to the mobile navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavClick {
    /// On the toggle button or inside it
    Toggle,
    /// On a navigation link
    Link,
    /// Inside the menu but not on a link
    Menu,
    /// Anywhere else on the page
    Outside,
}

impl NavClick {
    pub fn classify(in_toggle: bool, on_nav_link: bool, in_menu: bool) -> Self {
        if in_toggle {
            NavClick::Toggle
        } else if on_nav_link {
            NavClick::Link
        } else if in_menu {
            NavClick::Menu
        } else {
            NavClick::Outside
        }
    }
}

/// Open state of the mobile menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Feed a click and get the new open state
    pub fn on_click(&mut self, click: NavClick) -> bool {
        self.open = match click {
            NavClick::Toggle => !self.open,
            NavClick::Link | NavClick::Outside => false,
            NavClick::Menu => self.open,
        };
        self.open
    }
}

/// Element id an in-page link points at. A bare `#` points nowhere.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Scroll position that brings an element just below the fixed header
pub fn scroll_position(offset_top: f64, header_offset: f64) -> f64 {
    (offset_top - header_offset).max(0.0)
}
