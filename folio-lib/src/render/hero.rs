use super::markup::{safe_image_url, safe_url};
use super::social::social_links;
use super::DomOp;
use crate::anchor;
use crate::config::Layout;
use crate::document::{Greeting, Personal, Social};
use crate::utils::{first_word, non_blank};

/// Nav brand, hero text, avatar, resume link and hero social links
pub fn render_hero(
    personal: &Personal,
    greeting: Option<&Greeting>,
    social: &Social,
    layout: Layout,
) -> Vec<DomOp> {
    let mut ops = Vec::new();
    let name = personal.name.trim();

    ops.push(DomOp::text(anchor::NAV_BRAND, first_word(name)));

    match layout {
        Layout::Extended => {
            let greeting = greeting.cloned().unwrap_or_default();
            if let Some(title) = non_blank(greeting.title.as_ref()) {
                ops.push(DomOp::text(anchor::GREETING_TITLE, title));
            }
            ops.push(DomOp::text(anchor::HERO_NAME, name));
            if let Some(subtitle) = non_blank(greeting.subtitle.as_ref()) {
                ops.push(DomOp::text(anchor::GREETING_SUBTITLE, subtitle));
            }
            push_avatar(&mut ops, personal);
            if let Some(resume) = safe_url(greeting.resume_link.as_ref()) {
                ops.push(DomOp::attr(anchor::RESUME_LINK, "href", resume));
            }
        }
        Layout::Basic => {
            ops.push(DomOp::text(anchor::HERO_NAME, name));
            if let Some(title) = non_blank(personal.title.as_ref()) {
                ops.push(DomOp::text(anchor::HERO_TITLE, title));
            }
            if let Some(bio) = non_blank(personal.bio.as_ref()) {
                ops.push(DomOp::text(anchor::HERO_BIO, bio));
            }
            push_avatar(&mut ops, personal);
        }
    }

    ops.push(DomOp::html(anchor::HERO_SOCIAL, social_links(social)));
    ops
}

fn push_avatar(ops: &mut Vec<DomOp>, personal: &Personal) {
    if let Some(avatar) = safe_image_url(personal.avatar.as_ref()) {
        ops.push(DomOp::attr(anchor::HERO_AVATAR, "src", avatar));
        ops.push(DomOp::attr(anchor::HERO_AVATAR, "alt", personal.name.trim()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal() -> Personal {
        Personal {
            name: "Ada Lovelace".to_string(),
            avatar: Some("img/ada.png".to_string()),
            title: Some("Analyst".to_string()),
            bio: Some("Wrote the first program.".to_string()),
            ..Personal::default()
        }
    }

    #[test]
    fn test_extended_hero() {
        let greeting = Greeting {
            title: Some("Hi all, I'm Ada".to_string()),
            subtitle: Some("I write programs for engines.".to_string()),
            resume_link: Some("resume.pdf".to_string()),
        };
        let social = Social::new().with("github", Some("https://github.com/ada"));

        let ops = render_hero(&personal(), Some(&greeting), &social, Layout::Extended);

        assert_eq!(ops[0], DomOp::text(anchor::NAV_BRAND, "Ada"));
        assert!(ops.contains(&DomOp::text(anchor::GREETING_TITLE, "Hi all, I'm Ada")));
        assert!(ops.contains(&DomOp::text(anchor::HERO_NAME, "Ada Lovelace")));
        assert!(ops.contains(&DomOp::attr(anchor::HERO_AVATAR, "src", "img/ada.png")));
        assert!(ops.contains(&DomOp::attr(anchor::HERO_AVATAR, "alt", "Ada Lovelace")));
        assert!(ops.contains(&DomOp::attr(anchor::RESUME_LINK, "href", "resume.pdf")));
        assert!(ops.iter().all(|op| op.anchor() != Some(anchor::HERO_BIO)));
    }

    #[test]
    fn test_missing_greeting_is_omitted() {
        let ops = render_hero(&personal(), None, &Social::new(), Layout::Extended);
        let anchors: Vec<_> = ops.iter().filter_map(DomOp::anchor).collect();
        assert!(!anchors.contains(&anchor::GREETING_TITLE));
        assert!(!anchors.contains(&anchor::GREETING_SUBTITLE));
        assert!(!anchors.contains(&anchor::RESUME_LINK));
        assert_eq!(ops.last(), Some(&DomOp::html(anchor::HERO_SOCIAL, "")));
    }

    #[test]
    fn test_basic_hero_uses_title_and_bio() {
        let ops = render_hero(&personal(), None, &Social::new(), Layout::Basic);
        assert!(ops.contains(&DomOp::text(anchor::HERO_TITLE, "Analyst")));
        assert!(ops.contains(&DomOp::text(anchor::HERO_BIO, "Wrote the first program.")));
        assert!(ops
            .iter()
            .all(|op| op.anchor() != Some(anchor::GREETING_TITLE)));
    }

    #[test]
    fn test_missing_avatar_is_omitted() {
        let personal = Personal {
            avatar: None,
            ..personal()
        };
        let ops = render_hero(&personal, None, &Social::new(), Layout::Basic);
        assert!(ops.iter().all(|op| op.anchor() != Some(anchor::HERO_AVATAR)));
    }
}
