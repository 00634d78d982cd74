use folio::{Dom, DomError};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// The live page as a render target
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, anchor: &str) -> Result<Element, DomError> {
        self.document
            .get_element_by_id(anchor)
            .ok_or_else(|| DomError::MissingAnchor(anchor.to_string()))
    }
}

impl Dom for WebDom {
    fn has_anchor(&self, anchor: &str) -> bool {
        self.document.get_element_by_id(anchor).is_some()
    }

    fn set_style_var(&mut self, name: &str, value: &str) -> Result<(), DomError> {
        let root = self
            .document
            .document_element()
            .and_then(|root| root.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| DomError::Unsupported {
                target: "html".to_string(),
                reason: "document has no root element",
            })?;

        root.style()
            .set_property(name, value)
            .map_err(|_| DomError::Unsupported {
                target: name.to_string(),
                reason: "style property rejected",
            })
    }

    fn set_text(&mut self, anchor: &str, text: &str) -> Result<(), DomError> {
        self.element(anchor)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_html(&mut self, anchor: &str, html: &str) -> Result<(), DomError> {
        self.element(anchor)?.set_inner_html(html);
        Ok(())
    }

    fn set_attr(&mut self, anchor: &str, name: &str, value: &str) -> Result<(), DomError> {
        self.element(anchor)?
            .set_attribute(name, value)
            .map_err(|_| DomError::Unsupported {
                target: anchor.to_string(),
                reason: "attribute rejected",
            })
    }

    fn replace_body(&mut self, html: &str) -> Result<(), DomError> {
        let body = self.document.body().ok_or_else(|| DomError::Unsupported {
            target: "body".to_string(),
            reason: "document has no body",
        })?;
        body.set_inner_html(html);
        Ok(())
    }
}
