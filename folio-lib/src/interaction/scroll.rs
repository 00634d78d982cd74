pub const SECTION_SELECTOR: &str = ".section";

/// Scroll offset past which the navbar is raised
pub const SHADOW_THRESHOLD: f64 = 100.0;
pub const SHADOW_RAISED: &str = "0 4px 20px rgba(0, 0, 0, 0.15)";
pub const SHADOW_RESTING: &str = "0 2px 10px rgba(0, 0, 0, 0.1)";

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Navbar shadow driven by the scroll offset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavbarShadow {
    last_scroll: f64,
    raised: Option<bool>,
}

impl NavbarShadow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_scroll(&self) -> f64 {
        self.last_scroll
    }

    /// The shadow to apply for a new scroll offset, or `None` when it is unchanged
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<&'static str> {
        self.last_scroll = scroll_y;
        let raised = scroll_y > SHADOW_THRESHOLD;
        if self.raised == Some(raised) {
            return None;
        }
        self.raised = Some(raised);
        Some(if raised { SHADOW_RAISED } else { SHADOW_RESTING })
    }
}

/// Inline style of a section before and after it is revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
    pub transition: Option<&'static str>,
}

impl RevealStyle {
    pub const HIDDEN: RevealStyle = RevealStyle {
        opacity: "0",
        transform: "translateY(20px)",
        transition: Some("opacity 0.8s ease, transform 0.8s ease"),
    };

    pub const SHOWN: RevealStyle = RevealStyle {
        opacity: "1",
        transform: "translateY(0)",
        transition: None,
    };

    /// `(property, value)` pairs to write on the element
    pub fn properties(&self) -> Vec<(&'static str, &'static str)> {
        let mut properties = vec![("opacity", self.opacity), ("transform", self.transform)];
        if let Some(transition) = self.transition {
            properties.push(("transition", transition));
        }
        properties
    }
}

/// Fade-in state of every observed section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollReveal {
    revealed: Vec<bool>,
}

impl ScrollReveal {
    /// Track `sections` elements, all hidden
    pub fn new(sections: usize) -> Self {
        Self {
            revealed: vec![false; sections],
        }
    }

    pub fn initial_style() -> RevealStyle {
        RevealStyle::HIDDEN
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// A section crossed into view. Returns the style to apply the first time only.
    pub fn on_intersect(&mut self, index: usize, is_intersecting: bool) -> Option<RevealStyle> {
        let revealed = self.revealed.get_mut(index)?;
        if !is_intersecting || *revealed {
            return None;
        }
        *revealed = true;
        Some(RevealStyle::SHOWN)
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|revealed| *revealed)
    }
}
