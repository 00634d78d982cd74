use crate::error::{DomError, SectionReport};
use crate::render::{DomOp, RenderPlan};
use std::collections::BTreeMap;

/// Something a render plan can be written into
pub trait Dom {
    /// Whether an element with this id exists
    fn has_anchor(&self, anchor: &str) -> bool;

    /// Write a CSS custom property on the root element
    fn set_style_var(&mut self, name: &str, value: &str) -> Result<(), DomError>;

    fn set_text(&mut self, anchor: &str, text: &str) -> Result<(), DomError>;

    fn set_html(&mut self, anchor: &str, html: &str) -> Result<(), DomError>;

    fn set_attr(&mut self, anchor: &str, name: &str, value: &str) -> Result<(), DomError>;

    fn replace_body(&mut self, html: &str) -> Result<(), DomError>;

    /// Whether `op` would succeed, without writing anything
    fn check(&self, op: &DomOp) -> Result<(), DomError> {
        match op.anchor() {
            Some(anchor) if !self.has_anchor(anchor) => {
                Err(DomError::MissingAnchor(anchor.to_string()))
            }
            _ => Ok(()),
        }
    }

    fn apply(&mut self, op: &DomOp) -> Result<(), DomError> {
        match op {
            DomOp::SetStyleVar { name, value } => self.set_style_var(name, value),
            DomOp::SetText { anchor, text } => self.set_text(anchor, text),
            DomOp::SetHtml { anchor, html } => self.set_html(anchor, html),
            DomOp::SetAttr {
                anchor,
                name,
                value,
            } => self.set_attr(anchor, name, value),
            DomOp::ReplaceBody { html } => self.replace_body(html),
        }
    }
}

/// Apply a plan section by section.
///
/// Every operation of a section is checked before the first one is written,
/// so a missing anchor or an element that cannot take the write leaves that
/// section untouched and the rest of the page renders. Sections that could
/// not be applied are returned.
pub fn apply_plan<D: Dom + ?Sized>(dom: &mut D, plan: &RenderPlan) -> Vec<SectionReport> {
    let mut skipped = Vec::new();

    for section_plan in &plan.sections {
        let missing = section_plan
            .anchors()
            .into_iter()
            .find(|anchor| !dom.has_anchor(anchor));

        let result = match missing {
            Some(anchor) => Err(DomError::MissingAnchor(anchor.to_string())),
            None => section_plan
                .ops
                .iter()
                .try_for_each(|op| dom.check(op))
                .and_then(|()| section_plan.ops.iter().try_for_each(|op| dom.apply(op))),
        };

        if let Err(error) = result {
            tracing::warn!(section = %section_plan.section, %error, "skipping section");
            skipped.push(SectionReport {
                section: section_plan.section,
                error,
            });
        }
    }

    skipped
}

/// What an element of a [`MemoryDom`] currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Html(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub content: Option<Content>,
    pub attributes: BTreeMap<String, String>,
}

/// In-memory DOM keyed by element id, for tests and dry runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDom {
    elements: BTreeMap<String, MemoryElement>,
    style_vars: BTreeMap<String, String>,
    body: Option<String>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// A DOM holding one empty element per anchor
    pub fn with_anchors<'a>(anchors: impl IntoIterator<Item = &'a str>) -> Self {
        let mut dom = Self::new();
        for anchor in anchors {
            dom.elements
                .insert(anchor.to_string(), MemoryElement::default());
        }
        dom
    }

    pub fn element(&self, anchor: &str) -> Option<&MemoryElement> {
        self.elements.get(anchor)
    }

    pub fn text(&self, anchor: &str) -> Option<&str> {
        match &self.element(anchor)?.content {
            Some(Content::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn html(&self, anchor: &str) -> Option<&str> {
        match &self.element(anchor)?.content {
            Some(Content::Html(html)) => Some(html),
            _ => None,
        }
    }

    pub fn attr(&self, anchor: &str, name: &str) -> Option<&str> {
        self.element(anchor)?
            .attributes
            .get(name)
            .map(String::as_str)
    }

    pub fn style_var(&self, name: &str) -> Option<&str> {
        self.style_vars.get(name).map(String::as_str)
    }

    pub fn style_vars(&self) -> &BTreeMap<String, String> {
        &self.style_vars
    }

    /// Body markup, once the body has been replaced
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Anchors that received content or attributes
    pub fn populated(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|(_, element)| element.content.is_some() || !element.attributes.is_empty())
            .map(|(anchor, _)| anchor.as_str())
            .collect()
    }

    fn element_mut(&mut self, anchor: &str) -> Result<&mut MemoryElement, DomError> {
        self.elements
            .get_mut(anchor)
            .ok_or_else(|| DomError::MissingAnchor(anchor.to_string()))
    }
}

impl Dom for MemoryDom {
    fn has_anchor(&self, anchor: &str) -> bool {
        self.elements.contains_key(anchor)
    }

    fn set_style_var(&mut self, name: &str, value: &str) -> Result<(), DomError> {
        self.style_vars.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_text(&mut self, anchor: &str, text: &str) -> Result<(), DomError> {
        self.element_mut(anchor)?.content = Some(Content::Text(text.to_string()));
        Ok(())
    }

    fn set_html(&mut self, anchor: &str, html: &str) -> Result<(), DomError> {
        self.element_mut(anchor)?.content = Some(Content::Html(html.to_string()));
        Ok(())
    }

    fn set_attr(&mut self, anchor: &str, name: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(anchor)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn replace_body(&mut self, html: &str) -> Result<(), DomError> {
        // Every anchor lives in the body
        self.elements.clear();
        self.body = Some(html.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Section, SectionPlan};

    fn plan() -> RenderPlan {
        RenderPlan {
            sections: vec![
                SectionPlan {
                    section: Section::Theme,
                    ops: vec![DomOp::SetStyleVar {
                        name: "--primary-color",
                        value: "#000".to_string(),
                    }],
                },
                SectionPlan {
                    section: Section::Hero,
                    ops: vec![
                        DomOp::text("nav-brand", "Ada"),
                        DomOp::text("hero-name", "Ada Lovelace"),
                    ],
                },
                SectionPlan {
                    section: Section::Footer,
                    ops: vec![DomOp::text("footer-text", "© 2025 Ada")],
                },
            ],
        }
    }

    #[test]
    fn test_apply_plan() {
        let mut dom = MemoryDom::with_anchors(["nav-brand", "hero-name", "footer-text"]);
        let skipped = apply_plan(&mut dom, &plan());

        assert!(skipped.is_empty());
        assert_eq!(dom.style_var("--primary-color"), Some("#000"));
        assert_eq!(dom.text("hero-name"), Some("Ada Lovelace"));
        assert_eq!(dom.text("footer-text"), Some("© 2025 Ada"));
    }

    #[test]
    fn test_missing_anchor_skips_only_its_section() {
        // hero-name is missing from the markup
        let mut dom = MemoryDom::with_anchors(["nav-brand", "footer-text"]);
        let skipped = apply_plan(&mut dom, &plan());

        assert_eq!(
            skipped,
            vec![SectionReport {
                section: Section::Hero,
                error: DomError::MissingAnchor("hero-name".to_string()),
            }]
        );
        // nav-brand exists but its section was not written
        assert_eq!(dom.text("nav-brand"), None);
        assert_eq!(dom.text("footer-text"), Some("© 2025 Ada"));
    }

    #[test]
    fn test_replace_body_removes_anchors() {
        let mut dom = MemoryDom::with_anchors(["nav-brand"]);
        dom.replace_body("<p>gone</p>").unwrap();
        assert_eq!(dom.body(), Some("<p>gone</p>"));
        assert!(!dom.has_anchor("nav-brand"));
        assert!(dom.populated().is_empty());
    }

    #[test]
    fn test_text_and_html_are_distinct() {
        let mut dom = MemoryDom::with_anchors(["a"]);
        dom.set_html("a", "<b>x</b>").unwrap();
        assert_eq!(dom.html("a"), Some("<b>x</b>"));
        assert_eq!(dom.text("a"), None);
        dom.set_text("a", "x").unwrap();
        assert_eq!(dom.text("a"), Some("x"));
        assert_eq!(dom.html("a"), None);
    }
}
