//! Passive page behaviors, as small state machines.
//!
//! Nothing here touches a real DOM. Each behavior owns its state and turns
//! browser events (clicks, scroll offsets, intersections) into the changes
//! the page should make. The browser binding feeds the events in and applies
//! the results; tests drive them directly.

mod effects;
mod nav;
mod scroll;
mod typing;

pub use effects::{
    LazyImages, Rect, Ripple, RippleSpan, LAZY_IMAGE_SELECTOR, RIPPLE_BUTTON_SELECTOR,
    RIPPLE_CLASS, RIPPLE_LIFETIME,
};
pub use nav::{
    fragment_target, scroll_position, NavClick, NavToggle, ANCHOR_LINK_SELECTOR, HEADER_OFFSET,
    NAV_ACTIVE_CLASS, NAV_LINK_SELECTOR,
};
pub use scroll::{
    NavbarShadow, RevealStyle, ScrollReveal, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
    SECTION_SELECTOR, SHADOW_RAISED, SHADOW_RESTING, SHADOW_THRESHOLD,
};
pub use typing::{play, TextSink, Typewriter};

use crate::config::{Layout, SiteConfig, TypingConfig};
use serde::Serialize;
use std::str::FromStr;
use std::time::Duration;

/// Delay between a successful render and the start of deferred behaviors
pub const DEFERRED_START: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    NavToggle,
    SmoothScroll,
    NavbarShadow,
    Ripple,
    ScrollReveal,
    /// Reveal again when the tab becomes visible
    RevealRearm,
    Typing,
    LazyImages,
}

impl Behavior {
    /// Whether this behavior waits for [`DEFERRED_START`] after rendering
    pub fn is_deferred(&self) -> bool {
        matches!(
            self,
            Behavior::ScrollReveal | Behavior::RevealRearm | Behavior::Typing | Behavior::LazyImages
        )
    }

    /// Behaviors a layout wires, in start order
    pub fn for_layout(layout: Layout) -> &'static [Behavior] {
        match layout {
            Layout::Extended => &[
                Behavior::NavToggle,
                Behavior::SmoothScroll,
                Behavior::NavbarShadow,
                Behavior::Ripple,
                Behavior::ScrollReveal,
                Behavior::RevealRearm,
                Behavior::Typing,
                Behavior::LazyImages,
            ],
            Layout::Basic => &[
                Behavior::NavToggle,
                Behavior::SmoothScroll,
                Behavior::ScrollReveal,
                Behavior::Typing,
            ],
        }
    }
}

/// Split a layout's behaviors into those started at once and those deferred
pub fn startup_plan(layout: Layout) -> (Vec<Behavior>, Vec<Behavior>) {
    Behavior::for_layout(layout)
        .iter()
        .copied()
        .partition(|behavior| !behavior.is_deferred())
}

/// Settings the browser binding needs, carried on the page's root element
#[derive(Debug, Clone, PartialEq)]
pub struct RigSettings {
    pub layout: Layout,
    pub header_offset: f64,
    pub typing: TypingConfig,
}

impl Default for RigSettings {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            header_offset: HEADER_OFFSET,
            typing: TypingConfig::default(),
        }
    }
}

impl RigSettings {
    pub const LAYOUT_ATTR: &'static str = "data-folio-layout";
    pub const HEADER_OFFSET_ATTR: &'static str = "data-folio-header-offset";
    pub const TYPING_DELAY_ATTR: &'static str = "data-folio-typing-delay";
    pub const TYPING_INTERVAL_ATTR: &'static str = "data-folio-typing-interval";

    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            layout: config.layout,
            header_offset: config.header_offset,
            typing: config.typing.clone(),
        }
    }

    pub fn to_attributes(&self) -> [(&'static str, String); 4] {
        [
            (Self::LAYOUT_ATTR, self.layout.as_str().to_string()),
            (Self::HEADER_OFFSET_ATTR, self.header_offset.to_string()),
            (Self::TYPING_DELAY_ATTR, self.typing.start_delay_ms.to_string()),
            (Self::TYPING_INTERVAL_ATTR, self.typing.interval_ms.to_string()),
        ]
    }

    /// Read settings back from attributes. Missing or unparsable values keep their defaults.
    pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            layout: parse_attr(get(Self::LAYOUT_ATTR)).unwrap_or(defaults.layout),
            header_offset: parse_attr(get(Self::HEADER_OFFSET_ATTR))
                .filter(|offset: &f64| offset.is_finite() && *offset >= 0.0)
                .unwrap_or(defaults.header_offset),
            typing: TypingConfig {
                start_delay_ms: parse_attr(get(Self::TYPING_DELAY_ATTR))
                    .unwrap_or(defaults.typing.start_delay_ms),
                interval_ms: parse_attr(get(Self::TYPING_INTERVAL_ATTR))
                    .filter(|interval: &u64| *interval > 0)
                    .unwrap_or(defaults.typing.interval_ms),
            },
        }
    }
}

fn parse_attr<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|value| value.trim().parse().ok())
}
