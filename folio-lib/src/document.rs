use crate::error::{DocumentError, SectionError};
use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;

/// Named color tokens written as global style variables
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub subtitle_color: Option<String>,
    pub card_color: Option<String>,
}

/// Hero greeting block of the extended layout
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Greeting {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub resume_link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub name: String,
    pub avatar: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Platform name to profile URL, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Social {
    links: Vec<(String, Option<String>)>,
}

impl Social {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a platform entry
    pub fn with(mut self, platform: impl Into<String>, url: Option<&str>) -> Self {
        self.links
            .push((platform.into(), url.map(|url| url.to_string())));
        self
    }

    /// Every entry, including absent ones
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.links
            .iter()
            .map(|(platform, url)| (platform.as_str(), url.as_deref()))
    }

    /// Entries carrying a non-blank URL
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries().filter_map(|(platform, url)| match url {
            Some(url) if !url.trim().is_empty() => Some((platform, url)),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

impl<'de> Deserialize<'de> for Social {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SocialVisitor;

        impl<'de> Visitor<'de> for SocialVisitor {
            type Value = Social;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping platform names to URLs")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Social, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut social = Social::new();
                while let Some((platform, url)) = map.next_entry::<String, Option<String>>()? {
                    social.links.push((platform, url));
                }
                Ok(social)
            }
        }

        deserializer.deserialize_map(SocialVisitor)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct About {
    pub description: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Experience {
    pub position: String,
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Education {
    pub degree: String,
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub year: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Achievement {
    pub title: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInEvent {
    pub title: String,
    pub organization: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub attendees: Option<String>,
    pub linked_in_url: Option<String>,
}

/// The whole portfolio document, decoded once per load.
///
/// Only `personal` (with a non-blank `name`) is required. Every other
/// top-level field is decoded on its own: when one is present but malformed
/// it is treated as absent and reported in `faults`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioDocument {
    pub theme: Option<Theme>,
    pub greeting: Option<Greeting>,
    pub personal: Personal,
    pub social: Social,
    pub about: Option<About>,
    pub skills: Option<Vec<SkillCategory>>,
    pub projects: Option<Vec<Project>>,
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub achievements: Option<Vec<Achievement>>,
    pub linked_in_events: Option<Vec<LinkedInEvent>>,
    pub faults: Vec<SectionError>,
}

impl PortfolioDocument {
    /// Parse and validate a JSON document
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DocumentError::Syntax(e.to_string()))?;
        Self::from_value(value)
    }

    /// Validate an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let Value::Object(mut root) = value else {
            return Err(DocumentError::NotAnObject);
        };

        let personal: Personal = match root.remove("personal") {
            None | Some(Value::Null) => return Err(DocumentError::MissingField("personal")),
            Some(value) => {
                serde_json::from_value(value).map_err(|e| DocumentError::InvalidField {
                    field: "personal",
                    reason: e.to_string(),
                })?
            }
        };
        if personal.name.trim().is_empty() {
            return Err(DocumentError::MissingField("personal.name"));
        }

        let mut faults = Vec::new();
        let mut document = PortfolioDocument {
            theme: take_field(&mut root, "theme", &mut faults),
            greeting: take_field(&mut root, "greeting", &mut faults),
            personal,
            social: take_field(&mut root, "social", &mut faults).unwrap_or_default(),
            about: take_field(&mut root, "about", &mut faults),
            skills: take_field(&mut root, "skills", &mut faults),
            projects: take_field(&mut root, "projects", &mut faults),
            experience: take_field(&mut root, "experience", &mut faults),
            education: take_field(&mut root, "education", &mut faults),
            achievements: take_field(&mut root, "achievements", &mut faults),
            linked_in_events: take_field(&mut root, "linkedInEvents", &mut faults),
            faults: Vec::new(),
        };
        document.faults = faults;

        Ok(document)
    }

    /// First word of the owner's name, used as the nav brand
    pub fn first_name(&self) -> &str {
        crate::utils::first_word(&self.personal.name)
    }
}

/// Decode one optional top-level field, recording a fault instead of failing
fn take_field<T: DeserializeOwned>(
    root: &mut Map<String, Value>,
    field: &'static str,
    faults: &mut Vec<SectionError>,
) -> Option<T> {
    match root.remove(field) {
        None | Some(Value::Null) => None,
        Some(value) => match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(field, error = %e, "ignoring malformed section");
                faults.push(SectionError {
                    field,
                    reason: e.to_string(),
                });
                None
            }
        },
    }
}

/// Accept strings, numbers and booleans for display-only fields such as years or dates
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected text or number, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
