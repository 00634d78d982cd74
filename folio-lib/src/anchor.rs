//! Element identifiers shared by the page skeleton and the renderers.
//!
//! Renaming an id in the markup without updating it here breaks the page;
//! `folio check` reports such mismatches against a template.

use crate::config::Layout;

pub const NAV_BRAND: &str = "nav-brand";
pub const NAV_MENU: &str = "nav-menu";
pub const NAV_TOGGLE: &str = "nav-toggle";

pub const GREETING_TITLE: &str = "greeting-title";
pub const GREETING_SUBTITLE: &str = "greeting-subtitle";
pub const RESUME_LINK: &str = "resume-link";
pub const HERO_NAME: &str = "hero-name";
pub const HERO_TITLE: &str = "hero-title";
pub const HERO_BIO: &str = "hero-bio";
pub const HERO_AVATAR: &str = "hero-avatar";
pub const HERO_SOCIAL: &str = "hero-social";

pub const ABOUT_DESCRIPTION: &str = "about-description";
pub const ABOUT_HIGHLIGHTS: &str = "about-highlights";

pub const SKILLS_CONTAINER: &str = "skills-container";
pub const PROJECTS_CONTAINER: &str = "projects-container";
pub const EXPERIENCE_CONTAINER: &str = "experience-container";
pub const EDUCATION_CONTAINER: &str = "education-container";
pub const ACHIEVEMENTS_CONTAINER: &str = "achievements-container";
pub const EVENTS_CONTAINER: &str = "events-container";

pub const CONTACT_INFO: &str = "contact-info";
pub const FOOTER_TEXT: &str = "footer-text";
pub const FOOTER_SOCIAL: &str = "footer-social";

const EXTENDED: &[&str] = &[
    NAV_BRAND,
    NAV_MENU,
    NAV_TOGGLE,
    GREETING_TITLE,
    HERO_NAME,
    GREETING_SUBTITLE,
    HERO_AVATAR,
    RESUME_LINK,
    HERO_SOCIAL,
    ABOUT_DESCRIPTION,
    ABOUT_HIGHLIGHTS,
    SKILLS_CONTAINER,
    PROJECTS_CONTAINER,
    EXPERIENCE_CONTAINER,
    EDUCATION_CONTAINER,
    ACHIEVEMENTS_CONTAINER,
    EVENTS_CONTAINER,
    CONTACT_INFO,
    FOOTER_TEXT,
    FOOTER_SOCIAL,
];

const BASIC: &[&str] = &[
    NAV_BRAND,
    NAV_MENU,
    NAV_TOGGLE,
    HERO_NAME,
    HERO_TITLE,
    HERO_BIO,
    HERO_AVATAR,
    HERO_SOCIAL,
    ABOUT_DESCRIPTION,
    ABOUT_HIGHLIGHTS,
    SKILLS_CONTAINER,
    PROJECTS_CONTAINER,
    EXPERIENCE_CONTAINER,
    EDUCATION_CONTAINER,
    CONTACT_INFO,
    FOOTER_TEXT,
    FOOTER_SOCIAL,
];

/// Every anchor a layout writes to or wires listeners on
pub fn required(layout: Layout) -> &'static [&'static str] {
    match layout {
        Layout::Extended => EXTENDED,
        Layout::Basic => BASIC,
    }
}

/// Anchor whose text the typing effect replays
pub fn typing_target(layout: Layout) -> &'static str {
    match layout {
        Layout::Extended => GREETING_SUBTITLE,
        Layout::Basic => HERO_TITLE,
    }
}
