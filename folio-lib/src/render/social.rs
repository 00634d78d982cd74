use super::markup::{attr, icon, is_safe_url};
use crate::document::Social;

/// Icon used for platforms without a dedicated one
pub const FALLBACK_ICON: &str = "fas fa-link";

/// Icon class for a social platform
pub fn icon_class(platform: &str) -> &'static str {
    match platform {
        "github" => "fab fa-github",
        "linkedin" => "fab fa-linkedin",
        "twitter" => "fab fa-twitter",
        "portfolio" => "fas fa-globe",
        "instagram" => "fab fa-instagram",
        "medium" => "fab fa-medium",
        "stackoverflow" => "fab fa-stack-overflow",
        _ => FALLBACK_ICON,
    }
}

/// One `a.social-link` per platform with a usable URL, in document order
pub fn social_links(social: &Social) -> String {
    let mut html = String::new();

    for (platform, url) in social.present() {
        let url = url.trim();
        if !is_safe_url(url) {
            tracing::warn!(platform, "dropping social link with a disallowed scheme");
            continue;
        }
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"social-link\" title=\"{}\">{}</a>",
            attr(url),
            attr(platform),
            icon(icon_class(platform))
        ));
    }

    html
}
