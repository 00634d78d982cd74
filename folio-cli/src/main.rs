use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use folio::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "folio.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let matches = build_cli().get_matches();

    let succeeded = match matches.subcommand() {
        Some(("render", sub_matches)) => render_command(sub_matches).await?,
        Some(("check", sub_matches)) => check_command(sub_matches).await?,
        Some(("plan", sub_matches)) => plan_command(sub_matches).await?,
        _ => {
            build_cli().print_help()?;
            std::process::exit(1);
        }
    };

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}

fn build_cli() -> Command {
    Command::new("folio")
        .version("0.1.0")
        .about("Render a single-page portfolio from a JSON document")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render the portfolio page into the template")
                .args(common_args())
                .arg(template_arg())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .help("Where to write the page (defaults to the configured output)"),
                )
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_name("YEAR")
                        .value_parser(clap::value_parser!(i32))
                        .help("Year printed in the footer (defaults to the current year)"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate the portfolio document and the template anchors")
                .args(common_args())
                .arg(template_arg()),
        )
        .subcommand(
            Command::new("plan")
                .about("Print the render plan as JSON")
                .args(common_args()),
        )
}

fn common_args() -> Vec<Arg> {
    vec![
        Arg::new("config")
            .short('c')
            .long("config")
            .value_name("FILE")
            .help("YAML site configuration (defaults to ./folio.yaml when present)"),
        Arg::new("data")
            .short('d')
            .long("data")
            .value_name("PATH_OR_URL")
            .help("Portfolio document: a file path or an http(s) URL"),
        Arg::new("layout")
            .long("layout")
            .value_name("LAYOUT")
            .value_parser(["extended", "basic"])
            .help("Page layout"),
    ]
}

fn template_arg() -> Arg {
    Arg::new("template")
        .short('t')
        .long("template")
        .value_name("FILE")
        .help("HTML skeleton (defaults to the built-in skeleton for the layout)")
}

/// Load the configuration and apply command-line overrides
async fn load_config(matches: &ArgMatches) -> Result<SiteConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                anyhow::bail!("Config file '{}' does not exist", path.display());
            }
            parse_config_file(&path).await?
        }
        None if Path::new(DEFAULT_CONFIG).exists() => parse_config_file(DEFAULT_CONFIG).await?,
        None => SiteConfig::default(),
    };

    if let Some(data) = matches.get_one::<String>("data") {
        config.data = data.clone();
    }
    if let Some(layout) = matches.get_one::<String>("layout") {
        config.layout = layout.parse().map_err(anyhow::Error::msg)?;
    }
    if let Ok(Some(template)) = matches.try_get_one::<String>("template") {
        config.template = Some(PathBuf::from(template));
    }
    if let Ok(Some(output)) = matches.try_get_one::<String>("output") {
        config.output = PathBuf::from(output);
    }
    if let Ok(Some(year)) = matches.try_get_one::<i32>("year") {
        config.year = Some(*year);
    }

    validate_config(&config)?;
    Ok(config)
}

async fn render_command(matches: &ArgMatches) -> Result<bool> {
    let folio = Folio::from_config(load_config(matches).await?);
    let config = folio.config();

    println!("Folio Page Renderer");
    println!("===================");
    println!("Data: {}", config.data);
    match &config.template {
        Some(template) => println!("Template: {}", template.display()),
        None => println!("Template: built-in ({})", config.layout.as_str()),
    }
    println!();

    let page = folio.render().await?;
    page.write_to(&config.output).await?;

    match &page.outcome {
        RenderOutcome::Rendered(report) => {
            println!("✓ Rendered portfolio page");
            for fault in &report.faults {
                println!("  ! {}", fault);
            }
            for skipped in &report.skipped {
                println!("  ! section {} skipped: {}", skipped.section, skipped.error);
            }
            println!("Page written to: {}", config.output.display());
            Ok(true)
        }
        RenderOutcome::Failed(error) => {
            println!("✗ Failed to load portfolio data: {}", error);
            println!("Error page written to: {}", config.output.display());
            Ok(false)
        }
    }
}

async fn check_command(matches: &ArgMatches) -> Result<bool> {
    let folio = Folio::from_config(load_config(matches).await?);
    let config = folio.config();

    println!("Checking {} ({} layout)...", config.data, config.layout.as_str());
    let report = folio.check().await?;

    for line in document_status(&report) {
        println!("{}", line);
    }

    if report.missing_anchors.is_empty() {
        println!("✓ Template carries every anchor");
    } else {
        println!(
            "✗ Template is missing {} anchor(s):",
            report.missing_anchors.len()
        );
        for anchor in &report.missing_anchors {
            println!("  - #{}", anchor);
        }
    }

    if report.is_clean() {
        println!("✓ No issues found");
    }

    Ok(report.is_clean())
}

/// Status lines for the document half of a check report
fn document_status(report: &CheckReport) -> Vec<String> {
    if let Some(error) = &report.load_error {
        return vec![format!("✗ {}", error)];
    }
    if report.faults.is_empty() {
        return vec!["✓ Portfolio document is valid".to_string()];
    }

    let mut lines = vec![format!(
        "✗ Portfolio document has {} malformed field(s):",
        report.faults.len()
    )];
    lines.extend(report.faults.iter().map(|fault| format!("  - {}", fault)));
    lines
}

async fn plan_command(matches: &ArgMatches) -> Result<bool> {
    let folio = Folio::from_config(load_config(matches).await?);

    let (_, plan) = folio
        .renderer()
        .plan()
        .await
        .with_context(|| format!("Failed to load portfolio data from {}", folio.config().data))?;

    println!("{}", plan.to_json()?);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_status_clean() {
        let report = CheckReport::default();
        assert_eq!(document_status(&report), ["✓ Portfolio document is valid"]);
    }

    #[test]
    fn test_document_status_with_faults() {
        let report = CheckReport {
            faults: vec![SectionError {
                field: "skills",
                reason: "expected a sequence".to_string(),
            }],
            ..CheckReport::default()
        };

        let lines = document_status(&report);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("✗"));
        assert!(lines.iter().all(|line| !line.contains("is valid")));
        assert!(lines[1].contains("skills"));
    }

    #[test]
    fn test_document_status_load_error() {
        let report = CheckReport {
            load_error: Some(LoadError::transport("data.json", "404 Not Found")),
            ..CheckReport::default()
        };
        let lines = document_status(&report);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("404 Not Found"));
    }
}
