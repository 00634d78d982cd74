use serde::Serialize;

use crate::config::RenderOptions;
use crate::document::PortfolioDocument;
use crate::dom::{apply_plan, Dom};
use crate::error::{LoadError, SectionError, SectionReport};
use crate::render::{error_panel, render_document, RenderPlan};
use crate::source::DocumentSource;

/// What a successful render left out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    /// Optional fields that were present but malformed
    pub faults: Vec<SectionError>,
    /// Sections the DOM could not take
    pub skipped: Vec<SectionReport>,
}

impl RenderReport {
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty() && self.skipped.is_empty()
    }
}

#[derive(Debug)]
pub enum RenderOutcome {
    /// The page was populated. Interactions may be started.
    Rendered(RenderReport),
    /// The body was replaced by the error panel
    Failed(LoadError),
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered(_))
    }

    pub fn report(&self) -> Option<&RenderReport> {
        match self {
            RenderOutcome::Rendered(report) => Some(report),
            RenderOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            RenderOutcome::Failed(error) => Some(error),
            RenderOutcome::Rendered(_) => None,
        }
    }
}

/// Fetches the portfolio document once and writes it into a page
pub struct PageRenderer<S> {
    source: S,
    options: RenderOptions,
}

impl<S: DocumentSource> PageRenderer<S> {
    pub fn new(source: S, options: RenderOptions) -> Self {
        Self { source, options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and validate the document
    pub async fn fetch_document(&self) -> Result<PortfolioDocument, LoadError> {
        tracing::debug!(source = %self.source.describe(), "fetching portfolio data");
        let body = self.source.fetch().await?;
        let document = PortfolioDocument::from_json(&body)?;
        Ok(document)
    }

    /// Fetch the document and build its render plan without touching a DOM
    pub async fn plan(&self) -> Result<(PortfolioDocument, RenderPlan), LoadError> {
        let document = self.fetch_document().await?;
        let plan = render_document(&document, &self.options);
        Ok((document, plan))
    }

    /// Populate `dom` from the document.
    ///
    /// Any load failure replaces the body with the static error panel; there
    /// is no partial render and no retry.
    pub async fn load<D: Dom + ?Sized>(&self, dom: &mut D) -> RenderOutcome {
        match self.plan().await {
            Ok((document, plan)) => {
                for fault in &document.faults {
                    tracing::warn!(
                        field = fault.field,
                        reason = %fault.reason,
                        "section data ignored"
                    );
                }
                let skipped = apply_plan(dom, &plan);
                tracing::info!(
                    sections = plan.sections.len() - skipped.len(),
                    skipped = skipped.len(),
                    "portfolio rendered"
                );
                RenderOutcome::Rendered(RenderReport {
                    faults: document.faults,
                    skipped,
                })
            }
            Err(error) => {
                tracing::error!(
                    source = %self.source.describe(),
                    %error,
                    "error loading portfolio data"
                );
                if let Err(dom_error) = dom.apply(&error_panel()) {
                    tracing::error!(error = %dom_error, "could not show the error panel");
                }
                RenderOutcome::Failed(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor;
    use crate::config::Layout;
    use crate::dom::MemoryDom;
    use crate::error::DocumentError;
    use crate::render::ERROR_PANEL_HTML;
    use crate::source::{FailingSource, StaticSource};

    fn options() -> RenderOptions {
        RenderOptions::for_layout(Layout::Extended).with_year(2025)
    }

    fn dom() -> MemoryDom {
        MemoryDom::with_anchors(anchor::required(Layout::Extended).iter().copied())
    }

    #[tokio::test]
    async fn test_load_populates_dom() {
        let source = StaticSource::new(r#"{"personal": {"name": "Ada Lovelace", "email": "ada@example.com"}}"#);
        let renderer = PageRenderer::new(source, options());
        let mut dom = dom();

        let outcome = renderer.load(&mut dom).await;

        assert!(outcome.is_rendered());
        assert!(outcome.report().unwrap().is_clean());
        assert_eq!(dom.text(anchor::NAV_BRAND), Some("Ada"));
        assert_eq!(
            dom.text(anchor::FOOTER_TEXT),
            Some("© 2025 Ada Lovelace. All rights reserved.")
        );
        assert!(dom.html(anchor::CONTACT_INFO).unwrap().contains("mailto:ada@example.com"));
    }

    #[tokio::test]
    async fn test_transport_failure_shows_error_panel() {
        let source = FailingSource::new("data.json", "404 Not Found");
        let renderer = PageRenderer::new(source, options());
        let mut dom = dom();

        let outcome = renderer.load(&mut dom).await;

        assert!(!outcome.is_rendered());
        assert!(outcome.error().unwrap().is_transport());
        assert_eq!(dom.body(), Some(ERROR_PANEL_HTML));
        assert!(dom.populated().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_document_shows_error_panel() {
        let renderer = PageRenderer::new(StaticSource::new("{not json"), options());
        let mut dom = dom();

        let outcome = renderer.load(&mut dom).await;

        assert!(matches!(
            outcome,
            RenderOutcome::Failed(LoadError::Malformed(DocumentError::Syntax(_)))
        ));
        assert_eq!(dom.body(), Some(ERROR_PANEL_HTML));
    }

    #[tokio::test]
    async fn test_section_fault_is_reported_not_fatal() {
        let source = StaticSource::new(r#"{"personal": {"name": "Ada"}, "projects": {"title": "x"}}"#);
        let renderer = PageRenderer::new(source, options());
        let mut dom = dom();

        let outcome = renderer.load(&mut dom).await;
        let report = outcome.report().unwrap();

        assert_eq!(report.faults.len(), 1);
        assert_eq!(report.faults[0].field, "projects");
        assert_eq!(dom.html(anchor::PROJECTS_CONTAINER), None);
        assert!(dom.html(anchor::SKILLS_CONTAINER).is_some());
    }
}
