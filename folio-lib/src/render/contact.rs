use super::markup::{attr, icon, is_safe_url, text};
use super::social::social_links;
use super::DomOp;
use crate::anchor;
use crate::document::{Personal, Social};
use crate::utils::non_blank;

/// Static, theme-independent panel that replaces the whole body when loading fails
pub const ERROR_PANEL_HTML: &str = concat!(
    "<div style=\"display: flex; align-items: center; justify-content: center; min-height: 100vh; text-align: center; padding: 20px;\">",
    "<div>",
    "<h1 style=\"color: #dc2626; margin-bottom: 1rem; font-size: 2rem;\">⚠️ Error Loading Portfolio</h1>",
    "<p style=\"color: #6b7280; font-size: 1.1rem;\">Unable to load portfolio data. Please check your data.json file.</p>",
    "<p style=\"color: #9ca3af; margin-top: 1rem;\">Make sure the file exists and contains valid JSON.</p>",
    "</div>",
    "</div>"
);

pub fn error_panel() -> DomOp {
    DomOp::ReplaceBody {
        html: ERROR_PANEL_HTML.to_string(),
    }
}

/// Email, phone and location blocks, each only when present
pub fn render_contact(personal: &Personal) -> Vec<DomOp> {
    let mut html = String::new();

    if let Some(email) = non_blank(personal.email.as_ref()) {
        let email = email.trim();
        html.push_str(&contact_item(
            "fas fa-envelope",
            "Email",
            &link_or_text(&format!("mailto:{}", email), email),
        ));
    }
    if let Some(phone) = non_blank(personal.phone.as_ref()) {
        let phone = phone.trim();
        let dial: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        html.push_str(&contact_item(
            "fas fa-phone",
            "Phone",
            &link_or_text(&format!("tel:{}", dial), phone),
        ));
    }
    if let Some(location) = non_blank(personal.location.as_ref()) {
        html.push_str(&contact_item(
            "fas fa-map-marker-alt",
            "Location",
            &format!("<p>{}</p>", text(location.trim())),
        ));
    }

    vec![DomOp::html(anchor::CONTACT_INFO, html)]
}

fn contact_item(icon_class: &str, heading: &str, details: &str) -> String {
    format!(
        "<div class=\"contact-item\"><div class=\"contact-icon\">{}</div><div class=\"contact-details\"><h3>{}</h3>{}</div></div>",
        icon(icon_class),
        text(heading),
        details
    )
}

fn link_or_text(href: &str, label: &str) -> String {
    if is_safe_url(href) {
        format!("<a href=\"{}\">{}</a>", attr(href), text(label))
    } else {
        format!("<p>{}</p>", text(label))
    }
}

pub fn render_footer(personal: &Personal, social: &Social, year: i32) -> Vec<DomOp> {
    vec![
        DomOp::text(
            anchor::FOOTER_TEXT,
            format!("© {} {}. All rights reserved.", year, personal.name.trim()),
        ),
        DomOp::html(anchor::FOOTER_SOCIAL, social_links(social)),
    ]
}
