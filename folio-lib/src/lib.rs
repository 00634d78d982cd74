pub mod anchor;
mod config;
mod document;
mod dom;
mod error;
pub mod interaction;
pub mod render;
mod renderer;
mod source;
mod template;
mod utils;
mod yaml_parser;

#[cfg(feature = "native")]
mod build_helper;

pub use config::*;
pub use document::*;
pub use dom::*;
pub use error::*;
pub use render::{render_document, render_section, DomOp, RenderPlan, Section, SectionPlan};
pub use renderer::*;
pub use source::*;
pub use template::TemplateDom;
pub use yaml_parser::*;

#[cfg(feature = "native")]
pub use build_helper::render_at_build_time;

#[cfg(feature = "native")]
pub use site::{CheckReport, Folio, RenderedPage};

#[cfg(feature = "native")]
mod site {
    use super::*;
    use crate::interaction::RigSettings;
    use anyhow::{Context, Result};
    use std::path::Path;

    /// Main entry point for rendering a site from its YAML configuration
    pub struct Folio {
        config: SiteConfig,
    }

    /// A rendered page and how the render went
    #[derive(Debug)]
    pub struct RenderedPage {
        pub html: String,
        pub outcome: RenderOutcome,
    }

    impl RenderedPage {
        /// Write the page, creating parent directories as needed
        pub async fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
            let path = path.as_ref();
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            tokio::fs::write(path, &self.html)
                .await
                .with_context(|| format!("Failed to write page: {}", path.display()))
        }
    }

    /// Everything `check` found wrong with a site
    #[derive(Debug, Default)]
    pub struct CheckReport {
        /// The document could not be loaded at all
        pub load_error: Option<LoadError>,
        /// Optional fields that were present but malformed
        pub faults: Vec<SectionError>,
        /// Anchors the layout writes to that the template lacks
        pub missing_anchors: Vec<&'static str>,
    }

    impl CheckReport {
        pub fn is_clean(&self) -> bool {
            self.load_error.is_none() && self.faults.is_empty() && self.missing_anchors.is_empty()
        }
    }

    impl Folio {
        /// Load the site configuration from a YAML file
        pub async fn new<P: AsRef<Path>>(config_path: P) -> Result<Self> {
            let config = parse_config_file(config_path).await?;
            Ok(Self { config })
        }

        pub fn from_config(config: SiteConfig) -> Self {
            Self { config }
        }

        pub fn config(&self) -> &SiteConfig {
            &self.config
        }

        /// Renderer reading the configured document
        pub fn renderer(&self) -> PageRenderer<Box<dyn DocumentSource>> {
            PageRenderer::new(source_for(&self.config.data), self.config.render_options())
        }

        /// The configured skeleton, or the built-in one for the layout
        pub async fn load_template(&self) -> Result<TemplateDom> {
            match &self.config.template {
                Some(path) => {
                    let html = tokio::fs::read_to_string(path)
                        .await
                        .with_context(|| format!("Failed to read template: {}", path.display()))?;
                    Ok(TemplateDom::new(html))
                }
                None => Ok(TemplateDom::builtin(self.config.layout)),
            }
        }

        /// Render the page into the template.
        ///
        /// A document that cannot be loaded still yields a page: the error panel.
        /// Only an unreadable template is an error here.
        pub async fn render(&self) -> Result<RenderedPage> {
            let mut dom = self.load_template().await?;

            for (name, value) in RigSettings::from_config(&self.config).to_attributes() {
                if let Err(error) = dom.set_root_attr(name, &value) {
                    tracing::warn!(%error, "interaction settings not written");
                    break;
                }
            }

            let outcome = self.renderer().load(&mut dom).await;
            Ok(RenderedPage {
                html: dom.into_html(),
                outcome,
            })
        }

        /// Validate the document and the template anchors without writing anything
        pub async fn check(&self) -> Result<CheckReport> {
            let template = self.load_template().await?;
            let mut report = CheckReport {
                missing_anchors: template.missing_anchors(anchor::required(self.config.layout)),
                ..CheckReport::default()
            };

            match self.renderer().fetch_document().await {
                Ok(document) => report.faults = document.faults,
                Err(error) => report.load_error = Some(error),
            }

            Ok(report)
        }
    }
}
