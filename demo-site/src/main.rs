use folio::PortfolioDocument;
use std::env;
use std::path::PathBuf;

/// Page rendered by build.rs from folio.yaml
const PAGE: &str = include_str!(concat!(env!("OUT_DIR"), "/index.html"));
/// The document the browser build fetches at runtime
const DATA: &str = include_str!("../data.json");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    println!("Demo Site - Portfolio rendered at build time");
    println!("============================================");

    let document = PortfolioDocument::from_json(DATA)?;
    println!("Portfolio of {}", document.personal.name);
    println!(
        "  {} projects, {} positions, {} events",
        document.projects.as_deref().unwrap_or_default().len(),
        document.experience.as_deref().unwrap_or_default().len(),
        document.linked_in_events.as_deref().unwrap_or_default().len()
    );

    tokio::fs::create_dir_all(&output_dir).await?;
    tokio::fs::write(output_dir.join("index.html"), PAGE).await?;
    tokio::fs::write(output_dir.join("data.json"), DATA).await?;

    println!("✓ Site written to {}", output_dir.display());
    println!("Serve the directory together with the folio-web package in pkg/");

    Ok(())
}
