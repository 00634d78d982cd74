use crate::config::SiteConfig;
use anyhow::{Context, Result};
#[cfg(feature = "native")]
use std::path::Path;

/// Parse a YAML site configuration file.
///
/// Relative `data`, `template` and `output` locations are resolved against
/// the directory that holds the file.
#[cfg(feature = "native")]
pub async fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = parse_config_string(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(config.resolve_relative_to(base_dir))
}

/// Parse a YAML string into a validated site configuration
pub fn parse_config_string(content: &str) -> Result<SiteConfig> {
    // An empty file is a valid, all-defaults configuration
    if content.trim().is_empty() {
        return Ok(SiteConfig::default());
    }

    let config: SiteConfig =
        serde_yaml::from_str(content).with_context(|| "Failed to parse YAML content")?;

    validate_config(&config)?;

    Ok(config)
}

/// Validate values serde cannot check on its own
pub fn validate_config(config: &SiteConfig) -> Result<()> {
    if config.data.trim().is_empty() {
        anyhow::bail!("'data' must name a file path or an http(s) URL");
    }

    if !config.header_offset.is_finite() || config.header_offset < 0.0 {
        anyhow::bail!(
            "'header_offset' must be a non-negative number, got {}",
            config.header_offset
        );
    }

    if config.typing.interval_ms == 0 {
        anyhow::bail!("'typing.interval_ms' must be greater than zero");
    }

    if let Some(year) = config.year {
        if !(1..=9999).contains(&year) {
            anyhow::bail!("'year' must be between 1 and 9999, got {}", year);
        }
    }

    let placeholders = [
        ("skills", &config.placeholders.skills),
        ("projects", &config.placeholders.projects),
        ("experience", &config.placeholders.experience),
        ("education", &config.placeholders.education),
        ("achievements", &config.placeholders.achievements),
        ("events", &config.placeholders.events),
    ];
    for (name, text) in placeholders {
        if text.trim().is_empty() {
            anyhow::bail!("Placeholder '{}' cannot be empty", name);
        }
    }

    Ok(())
}
