//! Pure mapping from a portfolio document to DOM operations.
//!
//! Nothing here touches a DOM: every renderer takes the slice of the
//! document it needs and returns the operations that would write it. The
//! same document and options always produce the same plan.

mod contact;
mod content;
mod hero;
pub(crate) mod markup;
mod showcase;
mod social;
mod theme;

pub use contact::{error_panel, render_contact, render_footer, ERROR_PANEL_HTML};
pub use content::{
    render_about, render_education, render_experience, render_projects, render_skills,
};
pub use hero::render_hero;
pub use markup::{is_safe_image_url, is_safe_url};
pub use showcase::{render_achievements, render_events, DEFAULT_ACHIEVEMENT_ICON};
pub use social::{icon_class, social_links, FALLBACK_ICON};
pub use theme::{is_safe_css_value, render_theme, theme_variables};

use crate::config::{Layout, RenderOptions};
use crate::document::PortfolioDocument;
use serde::Serialize;
use std::fmt;

/// One top-level block of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Theme,
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Achievements,
    Events,
    Contact,
    Footer,
}

const EXTENDED_ORDER: &[Section] = &[
    Section::Theme,
    Section::Hero,
    Section::About,
    Section::Skills,
    Section::Projects,
    Section::Experience,
    Section::Education,
    Section::Achievements,
    Section::Events,
    Section::Contact,
    Section::Footer,
];

const BASIC_ORDER: &[Section] = &[
    Section::Theme,
    Section::Hero,
    Section::About,
    Section::Skills,
    Section::Projects,
    Section::Experience,
    Section::Education,
    Section::Contact,
    Section::Footer,
];

impl Section {
    /// Sections of a layout, in render order
    pub fn order(layout: Layout) -> &'static [Section] {
        match layout {
            Layout::Extended => EXTENDED_ORDER,
            Layout::Basic => BASIC_ORDER,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Theme => "theme",
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Achievements => "achievements",
            Section::Events => "events",
            Section::Contact => "contact",
            Section::Footer => "footer",
        }
    }

    /// The optional document field this section is built from.
    ///
    /// Hero, contact and footer read `personal`, which is always valid once a
    /// document decodes.
    pub fn source_field(&self) -> Option<&'static str> {
        match self {
            Section::Theme => Some("theme"),
            Section::About => Some("about"),
            Section::Skills => Some("skills"),
            Section::Projects => Some("projects"),
            Section::Experience => Some("experience"),
            Section::Education => Some("education"),
            Section::Achievements => Some("achievements"),
            Section::Events => Some("linkedInEvents"),
            Section::Hero | Section::Contact | Section::Footer => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single DOM mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DomOp {
    /// Write a CSS custom property on the root element
    SetStyleVar { name: &'static str, value: String },
    /// Overwrite the text content of an anchor
    SetText { anchor: &'static str, text: String },
    /// Overwrite the inner HTML of an anchor
    SetHtml { anchor: &'static str, html: String },
    /// Set one attribute of an anchor
    SetAttr {
        anchor: &'static str,
        name: &'static str,
        value: String,
    },
    /// Replace the whole body
    ReplaceBody { html: String },
}

impl DomOp {
    pub(crate) fn text(anchor: &'static str, text: impl Into<String>) -> Self {
        DomOp::SetText {
            anchor,
            text: text.into(),
        }
    }

    pub(crate) fn html(anchor: &'static str, html: impl Into<String>) -> Self {
        DomOp::SetHtml {
            anchor,
            html: html.into(),
        }
    }

    pub(crate) fn attr(anchor: &'static str, name: &'static str, value: impl Into<String>) -> Self {
        DomOp::SetAttr {
            anchor,
            name,
            value: value.into(),
        }
    }

    /// Anchor element this operation writes into, if any
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            DomOp::SetText { anchor, .. }
            | DomOp::SetHtml { anchor, .. }
            | DomOp::SetAttr { anchor, .. } => Some(anchor),
            DomOp::SetStyleVar { .. } | DomOp::ReplaceBody { .. } => None,
        }
    }
}

/// Operations produced by one section renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionPlan {
    pub section: Section,
    pub ops: Vec<DomOp>,
}

impl SectionPlan {
    /// Anchors the section writes into, without duplicates
    pub fn anchors(&self) -> Vec<&'static str> {
        let mut anchors: Vec<&'static str> = Vec::new();
        for anchor in self.ops.iter().filter_map(DomOp::anchor) {
            if !anchors.contains(&anchor) {
                anchors.push(anchor);
            }
        }
        anchors
    }
}

/// Everything a document renders to, section by section in render order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    pub sections: Vec<SectionPlan>,
}

impl RenderPlan {
    pub fn section(&self, section: Section) -> Option<&SectionPlan> {
        self.sections.iter().find(|plan| plan.section == section)
    }

    pub fn ops(&self) -> impl Iterator<Item = &DomOp> {
        self.sections.iter().flat_map(|plan| plan.ops.iter())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the plan for a whole document.
///
/// A section whose source field was present but malformed is left out, so
/// its anchors keep whatever the skeleton holds.
pub fn render_document(document: &PortfolioDocument, options: &RenderOptions) -> RenderPlan {
    let sections = Section::order(options.layout)
        .iter()
        .filter(|section| match section.source_field() {
            Some(field) => !document.faults.iter().any(|fault| fault.field == field),
            None => true,
        })
        .map(|&section| SectionPlan {
            section,
            ops: render_section(section, document, options),
        })
        .collect();

    RenderPlan { sections }
}

/// Run the renderer of one section
pub fn render_section(
    section: Section,
    document: &PortfolioDocument,
    options: &RenderOptions,
) -> Vec<DomOp> {
    let placeholders = &options.placeholders;

    let ops = match section {
        Section::Theme => render_theme(document.theme.as_ref(), options.layout),
        Section::Hero => render_hero(
            &document.personal,
            document.greeting.as_ref(),
            &document.social,
            options.layout,
        ),
        Section::About => render_about(document.about.as_ref()),
        Section::Skills => render_skills(document.skills.as_deref(), &placeholders.skills),
        Section::Projects => render_projects(document.projects.as_deref(), &placeholders.projects),
        Section::Experience => {
            render_experience(document.experience.as_deref(), &placeholders.experience)
        }
        Section::Education => {
            render_education(document.education.as_deref(), &placeholders.education)
        }
        Section::Achievements => {
            render_achievements(document.achievements.as_deref(), &placeholders.achievements)
        }
        Section::Events => {
            render_events(document.linked_in_events.as_deref(), &placeholders.events)
        }
        Section::Contact => render_contact(&document.personal),
        Section::Footer => render_footer(&document.personal, &document.social, options.year),
    };

    tracing::debug!(section = %section, ops = ops.len(), "rendered section");
    ops
}
