//! A [`Dom`] backed by an HTML skeleton string.
//!
//! Every write parses the page with html5ever, edits the tree and serializes
//! it back, so implied end tags, comments and raw-text elements follow the
//! HTML parsing rules a browser applies.

use crate::config::Layout;
use crate::dom::Dom;
use crate::error::DomError;
use crate::render::DomOp;
use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{parse_document, parse_fragment, Attribute, LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::RefCell;
use std::rc::Rc;

const EXTENDED_SKELETON: &str = include_str!("../templates/extended.html");
const BASIC_SKELETON: &str = include_str!("../templates/basic.html");

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Rendered page built by writing operations into a skeleton
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDom {
    html: String,
}

impl TemplateDom {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// The skeleton bundled for a layout
    pub fn builtin(layout: Layout) -> Self {
        match layout {
            Layout::Extended => Self::new(EXTENDED_SKELETON),
            Layout::Basic => Self::new(BASIC_SKELETON),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Anchors from `anchors` that have no element in the skeleton
    pub fn missing_anchors<'a>(&self, anchors: &[&'a str]) -> Vec<&'a str> {
        let document = parse(&self.html);
        anchors
            .iter()
            .copied()
            .filter(|anchor| find_by_id(&document.document, anchor).is_none())
            .collect()
    }

    /// Set an attribute on the `<html>` element
    pub fn set_root_attr(&mut self, name: &str, value: &str) -> Result<(), DomError> {
        self.edit(|document| {
            write_attr(&root(document)?, name, value);
            Ok(())
        })
    }

    /// Parse the page, run `change` on the tree and keep the result
    fn edit(
        &mut self,
        change: impl FnOnce(&Handle) -> Result<(), DomError>,
    ) -> Result<(), DomError> {
        let document = parse(&self.html);
        change(&document.document)?;
        self.html = to_html(&document)?;
        Ok(())
    }
}

fn parse(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

fn to_html(document: &RcDom) -> Result<String, DomError> {
    let mut bytes = Vec::new();
    let handle: SerializableHandle = document.document.clone().into();
    serialize(&mut bytes, &handle, SerializeOpts::default()).map_err(|_| {
        DomError::Unsupported {
            target: "html".to_string(),
            reason: "page could not be serialized",
        }
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn find(node: &Handle, matches: &dyn Fn(&QualName, &[Attribute]) -> bool) -> Option<Handle> {
    if let NodeData::Element { name, attrs, .. } = &node.data {
        if matches(name, &attrs.borrow()) {
            return Some(node.clone());
        }
    }
    node.children
        .borrow()
        .iter()
        .find_map(|child| find(child, matches))
}

fn find_by_id(document: &Handle, id: &str) -> Option<Handle> {
    find(document, &|_, attrs| {
        attrs
            .iter()
            .any(|attr| &*attr.name.local == "id" && &*attr.value == id)
    })
}

fn find_by_tag(document: &Handle, tag: &str) -> Option<Handle> {
    find(document, &|name, _| &*name.local == tag)
}

fn root(document: &Handle) -> Result<Handle, DomError> {
    find_by_tag(document, "html").ok_or_else(|| DomError::Unsupported {
        target: "html".to_string(),
        reason: "template has no root element",
    })
}

fn element(document: &Handle, anchor: &str) -> Result<Handle, DomError> {
    find_by_id(document, anchor).ok_or_else(|| DomError::MissingAnchor(anchor.to_string()))
}

fn tag_name(node: &Handle) -> Option<QualName> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.clone()),
        _ => None,
    }
}

fn is_void(node: &Handle) -> bool {
    tag_name(node).is_some_and(|name| VOID_ELEMENTS.contains(&&*name.local))
}

/// Fail for elements that cannot hold children
fn ensure_content(node: &Handle, target: &str) -> Result<(), DomError> {
    if is_void(node) {
        return Err(DomError::Unsupported {
            target: target.to_string(),
            reason: "void element has no content",
        });
    }
    Ok(())
}

fn read_attr(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

fn write_attr(node: &Handle, name: &str, value: &str) {
    let NodeData::Element { attrs, .. } = &node.data else {
        return;
    };
    let name = name.to_ascii_lowercase();
    let mut attrs = attrs.borrow_mut();
    match attrs.iter_mut().find(|attr| &*attr.name.local == name.as_str()) {
        Some(attr) => attr.value = StrTendril::from_slice(value),
        None => attrs.push(Attribute {
            name: QualName::new(None, Namespace::from(""), LocalName::from(name.as_str())),
            value: StrTendril::from_slice(value),
        }),
    }
}

fn replace_children(node: &Handle, children: Vec<Handle>) {
    let previous = std::mem::take(&mut *node.children.borrow_mut());
    for child in &previous {
        child.parent.set(None);
    }
    for child in &children {
        child.parent.set(Some(Rc::downgrade(node)));
    }
    *node.children.borrow_mut() = children;
}

fn text_node(text: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from_slice(text)),
    })
}

/// Parse `markup` as the content of an element named like `context`
fn parse_children(context: &Handle, markup: &str) -> Vec<Handle> {
    let context = tag_name(context).unwrap_or_else(|| {
        QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from("body"))
    });
    let fragment = parse_fragment(RcDom::default(), Default::default(), context, Vec::new())
        .one(markup);

    // The fragment parser wraps its result in a single <html> element
    let wrapper = fragment.document.children.borrow().first().cloned();
    wrapper
        .map(|wrapper| std::mem::take(&mut *wrapper.children.borrow_mut()))
        .unwrap_or_default()
}

/// Split a `style` attribute into declarations, keeping their order
fn parse_declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let property = property.trim();
            (!property.is_empty()).then(|| (property.to_string(), value.trim().to_string()))
        })
        .collect()
}

impl Dom for TemplateDom {
    fn has_anchor(&self, anchor: &str) -> bool {
        find_by_id(&parse(&self.html).document, anchor).is_some()
    }

    fn check(&self, op: &DomOp) -> Result<(), DomError> {
        let document = parse(&self.html);
        match op {
            DomOp::SetText { anchor, .. } | DomOp::SetHtml { anchor, .. } => {
                ensure_content(&element(&document.document, anchor)?, anchor)
            }
            DomOp::SetAttr { anchor, .. } => element(&document.document, anchor).map(|_| ()),
            DomOp::SetStyleVar { .. } => root(&document.document).map(|_| ()),
            DomOp::ReplaceBody { .. } => Ok(()),
        }
    }

    fn set_style_var(&mut self, name: &str, value: &str) -> Result<(), DomError> {
        self.edit(|document| {
            let root = root(document)?;
            let current = read_attr(&root, "style").unwrap_or_default();

            let mut declarations = parse_declarations(&current);
            match declarations.iter_mut().find(|(property, _)| property == name) {
                Some(declaration) => declaration.1 = value.to_string(),
                None => declarations.push((name.to_string(), value.to_string())),
            }

            let style = declarations
                .iter()
                .map(|(property, value)| format!("{}: {};", property, value))
                .collect::<Vec<_>>()
                .join(" ");
            write_attr(&root, "style", &style);
            Ok(())
        })
    }

    fn set_text(&mut self, anchor: &str, text: &str) -> Result<(), DomError> {
        self.edit(|document| {
            let target = element(document, anchor)?;
            ensure_content(&target, anchor)?;
            let children = if text.is_empty() {
                Vec::new()
            } else {
                vec![text_node(text)]
            };
            replace_children(&target, children);
            Ok(())
        })
    }

    fn set_html(&mut self, anchor: &str, html: &str) -> Result<(), DomError> {
        self.edit(|document| {
            let target = element(document, anchor)?;
            ensure_content(&target, anchor)?;
            let children = parse_children(&target, html);
            replace_children(&target, children);
            Ok(())
        })
    }

    fn set_attr(&mut self, anchor: &str, name: &str, value: &str) -> Result<(), DomError> {
        self.edit(|document| {
            write_attr(&element(document, anchor)?, name, value);
            Ok(())
        })
    }

    fn replace_body(&mut self, html: &str) -> Result<(), DomError> {
        self.edit(|document| {
            let body = find_by_tag(document, "body").ok_or_else(|| DomError::Unsupported {
                target: "body".to_string(),
                reason: "template has no body element",
            })?;
            let children = parse_children(&body, html);
            replace_children(&body, children);
            Ok(())
        })
    }
}
