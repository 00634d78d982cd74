use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Page layout - selects which sections, theme variables and interactions are used
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Greeting hero, six theme variables, achievements and LinkedIn events,
    /// navbar shadow, ripple and lazy-load fallback
    Extended,
    /// Title/bio hero, four theme variables, core sections only
    Basic,
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Extended
    }
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Extended => "extended",
            Layout::Basic => "basic",
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extended" => Ok(Layout::Extended),
            "basic" => Ok(Layout::Basic),
            other => Err(format!(
                "unknown layout '{}', expected 'extended' or 'basic'",
                other
            )),
        }
    }
}

/// Messages shown in place of an absent or empty list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Placeholders {
    pub skills: String,
    pub projects: String,
    pub experience: String,
    pub education: String,
    pub achievements: String,
    pub events: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            skills: "No skills added yet.".to_string(),
            projects: "No projects added yet.".to_string(),
            experience: "No experience added yet.".to_string(),
            education: "No education added yet.".to_string(),
            achievements: "No achievements added yet.".to_string(),
            events: "No events added yet. Add your LinkedIn events in data.json!".to_string(),
        }
    }
}

/// Timing of the subtitle typing effect
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TypingConfig {
    /// Delay before the first character appears
    pub start_delay_ms: u64,
    /// Delay between consecutive characters
    pub interval_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 500,
            interval_ms: 30,
        }
    }
}

impl TypingConfig {
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

fn default_data() -> String {
    "data.json".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("dist/index.html")
}

fn default_header_offset() -> f64 {
    80.0
}

/// Root structure of the YAML site configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Location of the portfolio document: a file path or an http(s) URL
    #[serde(default = "default_data")]
    pub data: String,
    /// HTML skeleton carrying the anchor elements
    /// If not specified, the built-in skeleton for the layout is used
    #[serde(default)]
    pub template: Option<PathBuf>,
    /// Where the rendered page is written
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub layout: Layout,
    /// Height of the fixed navbar, subtracted from smooth-scroll targets
    #[serde(default = "default_header_offset")]
    pub header_offset: f64,
    /// Pins the footer year; defaults to the current local year
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub placeholders: Placeholders,
    #[serde(default)]
    pub typing: TypingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data: default_data(),
            template: None,
            output: default_output(),
            layout: Layout::default(),
            header_offset: default_header_offset(),
            year: None,
            placeholders: Placeholders::default(),
            typing: TypingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Options handed to the section renderers
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            layout: self.layout,
            year: self.year.unwrap_or_else(current_year),
            placeholders: self.placeholders.clone(),
        }
    }

    /// Whether `data` points at a remote document
    pub fn data_is_remote(&self) -> bool {
        is_remote(&self.data)
    }

    /// Resolve relative file locations against the directory holding the config file
    pub fn resolve_relative_to(mut self, base_dir: &Path) -> Self {
        if !self.data_is_remote() && Path::new(&self.data).is_relative() {
            self.data = base_dir.join(&self.data).to_string_lossy().into_owned();
        }
        if let Some(template) = &self.template {
            if template.is_relative() {
                self.template = Some(base_dir.join(template));
            }
        }
        if self.output.is_relative() {
            self.output = base_dir.join(&self.output);
        }
        self
    }
}

/// Inputs of the pure document-to-plan mapping besides the document itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub layout: Layout,
    /// Year printed in the footer
    pub year: i32,
    pub placeholders: Placeholders,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            year: current_year(),
            placeholders: Placeholders::default(),
        }
    }
}

impl RenderOptions {
    pub fn for_layout(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

pub(crate) fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub(crate) fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
