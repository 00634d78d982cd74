//! Escaping and small markup fragments shared by the section renderers.

use std::borrow::Cow;

/// Escape a value for use as element text
pub(crate) fn text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escape a value for use inside a double-quoted attribute
pub(crate) fn attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Whether a URL may be placed in `href`/`src` without becoming executable
pub fn is_safe_url(url: &str) -> bool {
    // Browsers drop tabs and newlines inside URLs before resolving the scheme
    let compact: String = url
        .trim()
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();

    let scheme_end = compact.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(idx) if compact[idx..].starts_with(':') => {
            let scheme = compact[..idx].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto" | "tel")
        }
        // No scheme: relative URL
        _ => true,
    }
}

/// Whether a URL may be an image `src`: any safe URL, or inline `data:image/*`
pub fn is_safe_image_url(url: &str) -> bool {
    let url = url.trim();
    let inline_image = url
        .get(..11)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("data:image/"));
    inline_image || is_safe_url(url)
}

/// A non-blank URL that passed [`is_safe_url`]
pub(crate) fn safe_url(value: Option<&String>) -> Option<&str> {
    checked_url(value, is_safe_url)
}

/// A non-blank image source that passed [`is_safe_image_url`]
pub(crate) fn safe_image_url(value: Option<&String>) -> Option<&str> {
    checked_url(value, is_safe_image_url)
}

fn checked_url(value: Option<&String>, allowed: fn(&str) -> bool) -> Option<&str> {
    let url = crate::utils::non_blank(value)?;
    if allowed(url) {
        Some(url.trim())
    } else {
        tracing::warn!(url, "dropping link with a disallowed scheme");
        None
    }
}

pub(crate) fn icon(class: &str) -> String {
    format!("<i class=\"{}\"></i>", attr(class))
}

/// Anchor opening in a new tab; `inner` is already markup
pub(crate) fn external_link(href: &str, class: &str, inner: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"{}\">{}</a>",
        attr(href),
        attr(class),
        inner
    )
}

/// The single paragraph shown instead of an empty list
pub(crate) fn placeholder(message: &str) -> String {
    format!(
        "<p class=\"empty-state\" style=\"text-align: center; color: var(--subtitle-color);\">{}</p>",
        text(message)
    )
}

/// `<tag class="...">text</tag>`
pub(crate) fn element(tag: &str, class: &str, content: &str) -> String {
    format!("<{tag} class=\"{}\">{}</{tag}>", attr(class), text(content))
}

/// Tag list such as skills or technologies
pub(crate) fn tags(class: &str, items: &[String]) -> String {
    items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .map(|item| element("span", class, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaping() {
        assert_eq!(text("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
        assert_eq!(attr(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_is_safe_url() {
        assert!(is_safe_url("https://github.com/ada"));
        assert!(is_safe_url("HTTP://example.com"));
        assert!(is_safe_url("mailto:ada@example.com"));
        assert!(is_safe_url("tel:+15551234"));
        assert!(is_safe_url("images/avatar.png"));
        assert!(is_safe_url("/resume.pdf"));
        assert!(is_safe_url("#contact"));
        assert!(is_safe_url("path/with:colon"));

        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("  JavaScript:alert(1)"));
        assert!(!is_safe_url("java\tscript:alert(1)"));
        assert!(!is_safe_url("data:text/html;base64,AAAA"));
        assert!(!is_safe_url("vbscript:msgbox"));
    }

    #[test]
    fn test_inline_images_only_as_image_sources() {
        let png = "data:image/png;base64,iVBORw0KGgo=";
        assert!(is_safe_image_url(png));
        assert!(is_safe_image_url(" DATA:image/svg+xml;utf8,<svg/>"));
        assert!(is_safe_image_url("images/avatar.png"));
        assert!(!is_safe_url(png));

        assert!(!is_safe_image_url("data:text/html;base64,AAAA"));
        assert!(!is_safe_image_url("javascript:alert(1)"));

        assert_eq!(safe_image_url(Some(&png.to_string())), Some(png));
        assert_eq!(safe_url(Some(&png.to_string())), None);
    }

    #[test]
    fn test_safe_url_skips_blank() {
        assert_eq!(safe_url(Some(&"   ".to_string())), None);
        assert_eq!(safe_url(Some(&" https://a ".to_string())), Some("https://a"));
    }

    #[test]
    fn test_tags_skip_blank_items() {
        let items = vec!["Rust".to_string(), " ".to_string(), "Go".to_string()];
        assert_eq!(
            tags("skill-tag", &items),
            "<span class=\"skill-tag\">Rust</span><span class=\"skill-tag\">Go</span>"
        );
    }
}
