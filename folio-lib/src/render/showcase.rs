use super::content::list_or_placeholder;
use super::markup::{attr, element, external_link, icon, safe_image_url, safe_url, text};
use super::DomOp;
use crate::anchor;
use crate::document::{Achievement, LinkedInEvent};
use crate::utils::{non_blank, to_class_token};

pub const DEFAULT_ACHIEVEMENT_ICON: &str = "🏆";
const DEFAULT_EVENT_TYPE: &str = "Event";

pub fn render_achievements(
    achievements: Option<&[Achievement]>,
    empty_message: &str,
) -> Vec<DomOp> {
    let html = list_or_placeholder(achievements, empty_message, |achievement| {
        let icon = non_blank(achievement.icon.as_ref()).unwrap_or(DEFAULT_ACHIEVEMENT_ICON);

        let mut card = String::from("<div class=\"achievement-card\">");
        card.push_str(&element("span", "achievement-icon", icon));
        card.push_str(&element("h3", "achievement-title", &achievement.title));
        if let Some(description) = non_blank(achievement.description.as_ref()) {
            card.push_str(&element("p", "achievement-description", description));
        }
        if let Some(date) = non_blank(achievement.date.as_ref()) {
            card.push_str(&element("div", "achievement-date", date));
        }
        card.push_str("</div>");
        card
    });
    vec![DomOp::html(anchor::ACHIEVEMENTS_CONTAINER, html)]
}

pub fn render_events(events: Option<&[LinkedInEvent]>, empty_message: &str) -> Vec<DomOp> {
    let html = list_or_placeholder(events, empty_message, event_card);
    vec![DomOp::html(anchor::EVENTS_CONTAINER, html)]
}

fn event_card(event: &LinkedInEvent) -> String {
    let mut card = String::from("<div class=\"linkedin-event-card\">");

    if let Some(image) = safe_image_url(event.image.as_ref()) {
        card.push_str(&format!(
            "<div class=\"linkedin-event-image-wrapper\"><img src=\"{}\" alt=\"{}\" class=\"linkedin-event-image\" loading=\"lazy\"><span class=\"linkedin-badge\">{}</span></div>",
            attr(image),
            attr(&event.title),
            icon("fab fa-linkedin")
        ));
    }

    card.push_str("<div class=\"linkedin-event-content\">");

    let kind = non_blank(event.kind.as_ref()).unwrap_or(DEFAULT_EVENT_TYPE);
    let kind_class = match to_class_token(kind) {
        token if token.is_empty() => "event".to_string(),
        token => token,
    };
    card.push_str("<div class=\"event-header\">");
    card.push_str(&format!(
        "<span class=\"event-type-badge {}\">{}</span>",
        attr(&kind_class),
        text(kind)
    ));
    if let Some(attendees) = non_blank(event.attendees.as_ref()) {
        card.push_str(&format!(
            "<span class=\"event-attendees\">{} {}</span>",
            icon("fas fa-users"),
            text(attendees)
        ));
    }
    card.push_str("</div>");

    card.push_str(&element("h3", "linkedin-event-title", &event.title));

    card.push_str("<div class=\"linkedin-event-meta\">");
    if let Some(organization) = non_blank(event.organization.as_ref()) {
        card.push_str(&meta_line("event-organization", "fas fa-building", organization));
    }
    if let Some(date) = non_blank(event.date.as_ref()) {
        card.push_str(&meta_line("event-date", "far fa-calendar", date));
    }
    if let Some(location) = non_blank(event.location.as_ref()) {
        card.push_str(&meta_line("event-location", "fas fa-map-marker-alt", location));
    }
    card.push_str("</div>");

    if let Some(description) = non_blank(event.description.as_ref()) {
        card.push_str(&element("p", "linkedin-event-description", description));
    }

    if let Some(url) = safe_url(event.linked_in_url.as_ref()) {
        card.push_str(&format!(
            "<div class=\"linkedin-event-actions\">{}</div>",
            external_link(
                url,
                "linkedin-event-link",
                &format!("{} View on LinkedIn", icon("fab fa-linkedin"))
            )
        ));
    }

    card.push_str("</div></div>");
    card
}

fn meta_line(class: &str, icon_class: &str, value: &str) -> String {
    format!(
        "<div class=\"{}\">{} {}</div>",
        attr(class),
        icon(icon_class),
        text(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html_of(ops: Vec<DomOp>) -> String {
        match ops.as_slice() {
            [DomOp::SetHtml { html, .. }] => html.clone(),
            other => panic!("expected a single SetHtml, got {:?}", other),
        }
    }

    fn event(title: &str) -> LinkedInEvent {
        LinkedInEvent {
            title: title.to_string(),
            organization: Some("Rust Meetup".to_string()),
            date: Some("March 2024".to_string()),
            description: Some("Talk on ownership".to_string()),
            kind: None,
            image: None,
            location: None,
            attendees: None,
            linked_in_url: None,
        }
    }

    #[test]
    fn test_empty_achievements_render_one_placeholder() {
        for achievements in [None, Some(&[][..])] {
            let html = html_of(render_achievements(achievements, "No achievements added yet."));
            assert_eq!(html.matches("<p").count(), 1);
            assert_eq!(html.matches("achievement-card").count(), 0);
            assert!(html.contains("No achievements added yet."));
        }
    }

    #[test]
    fn test_achievement_default_icon() {
        let achievement = Achievement {
            title: "Winner".to_string(),
            description: None,
            date: Some("2023".to_string()),
            icon: None,
        };
        let html = html_of(render_achievements(Some(&[achievement]), "none"));
        assert!(html.contains("<span class=\"achievement-icon\">🏆</span>"));
        assert!(html.contains("<div class=\"achievement-date\">2023</div>"));
        assert!(!html.contains("achievement-description"));
    }

    #[test]
    fn test_event_optional_fields_omitted() {
        let html = html_of(render_events(Some(&[event("Ownership 101")]), "none"));

        assert!(html.contains("<span class=\"event-type-badge event\">Event</span>"));
        assert!(!html.contains("event-location"));
        assert!(!html.contains("event-attendees"));
        assert!(!html.contains("linkedin-event-image"));
        assert!(!html.contains("linkedin-event-actions"));
    }

    #[test]
    fn test_event_optional_fields_rendered() {
        let full = LinkedInEvent {
            kind: Some("Live Session".to_string()),
            image: Some("talk.png".to_string()),
            location: Some("Berlin".to_string()),
            attendees: Some("120".to_string()),
            linked_in_url: Some("https://linkedin.com/events/1".to_string()),
            ..event("Ownership 101")
        };
        let html = html_of(render_events(Some(&[full]), "none"));

        assert!(html.contains("event-type-badge live-session"));
        assert!(html.contains("<i class=\"fas fa-users\"></i> 120"));
        assert!(html.contains("<i class=\"fas fa-map-marker-alt\"></i> Berlin"));
        assert!(html.contains("href=\"https://linkedin.com/events/1\""));
        assert!(html.contains("src=\"talk.png\""));
    }

    #[test]
    fn test_empty_events_placeholder() {
        let html = html_of(render_events(
            None,
            "No events added yet. Add your LinkedIn events in data.json!",
        ));
        assert_eq!(html.matches("<p").count(), 1);
        assert!(!html.contains("linkedin-event-card"));
    }
}
