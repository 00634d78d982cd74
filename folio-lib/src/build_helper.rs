use crate::{Folio, RenderOutcome};

/// Build script helper for rendering the portfolio page at build time.
///
/// This function should be called from your build.rs script. It will:
/// - Load the site configuration and tell cargo to rerun when it, the data
///   file or the template changes
/// - Render the page and write it to `output_file`
/// - Fail the build if the portfolio document cannot be loaded
///
/// # Arguments
///
/// * `config_file` - Path to the YAML site configuration (relative to build.rs)
/// * `output_file` - Path to write the rendered page (typically under `OUT_DIR`)
///
/// # Example
///
/// ```rust,no_run
/// // build.rs
/// use folio::render_at_build_time;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let out_dir = std::env::var("OUT_DIR")?;
///     render_at_build_time("folio.yaml", &format!("{}/index.html", out_dir)).await?;
///
///     Ok(())
/// }
/// ```
pub async fn render_at_build_time(
    config_file: &str,
    output_file: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    // Tell cargo to rerun if the site configuration changes
    println!("cargo:rerun-if-changed={}", config_file);

    let folio = Folio::new(config_file).await?;
    let config = folio.config();

    // Remote documents are fetched on every build that runs
    if !config.data_is_remote() {
        println!("cargo:rerun-if-changed={}", config.data);
    }
    if let Some(template) = &config.template {
        println!("cargo:rerun-if-changed={}", template.display());
    }

    println!("cargo:info=Rendering portfolio page from {}", config.data);
    let page = folio.render().await?;

    match &page.outcome {
        RenderOutcome::Rendered(report) => {
            for fault in &report.faults {
                println!("cargo:warning={}", fault);
            }
            for skipped in &report.skipped {
                println!("cargo:warning=section {} skipped: {}", skipped.section, skipped.error);
            }
            page.write_to(output_file).await?;
            println!("cargo:info=Successfully rendered portfolio page at {}", output_file);
        }
        RenderOutcome::Failed(error) => {
            return Err(format!("failed to load portfolio data: {}", error).into());
        }
    }

    Ok(())
}
