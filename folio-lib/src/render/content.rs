use super::markup::{
    attr, element, external_link, icon, placeholder, safe_image_url, safe_url, tags, text,
};
use super::DomOp;
use crate::anchor;
use crate::document::{About, Education, Experience, Project, SkillCategory};
use crate::utils::non_blank;

pub fn render_about(about: Option<&About>) -> Vec<DomOp> {
    let about = about.cloned().unwrap_or_default();
    let mut ops = Vec::new();

    if let Some(description) = non_blank(about.description.as_ref()) {
        ops.push(DomOp::text(anchor::ABOUT_DESCRIPTION, description));
    }

    let highlights: String = about
        .highlights
        .iter()
        .filter(|highlight| !highlight.trim().is_empty())
        .map(|highlight| element("div", "highlight-card", highlight))
        .collect();
    ops.push(DomOp::html(anchor::ABOUT_HIGHLIGHTS, highlights));

    ops
}

pub fn render_skills(skills: Option<&[SkillCategory]>, empty_message: &str) -> Vec<DomOp> {
    let html = list_or_placeholder(skills, empty_message, |category| {
        format!(
            "<div class=\"skill-category\"><h3>{}</h3><div class=\"skill-tags\">{}</div></div>",
            text(&category.category),
            tags("skill-tag", &category.items)
        )
    });
    vec![DomOp::html(anchor::SKILLS_CONTAINER, html)]
}

pub fn render_projects(projects: Option<&[Project]>, empty_message: &str) -> Vec<DomOp> {
    let html = list_or_placeholder(projects, empty_message, project_card);
    vec![DomOp::html(anchor::PROJECTS_CONTAINER, html)]
}

fn project_card(project: &Project) -> String {
    let mut card = String::from("<div class=\"project-card\">");

    if let Some(image) = safe_image_url(project.image.as_ref()) {
        card.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"project-image\" loading=\"lazy\">",
            attr(image),
            attr(&project.title)
        ));
    }

    card.push_str("<div class=\"project-content\">");
    card.push_str(&element("h3", "project-title", &project.title));
    if let Some(description) = non_blank(project.description.as_ref()) {
        card.push_str(&element("p", "project-description", description));
    }
    if project.technologies.iter().any(|tech| !tech.trim().is_empty()) {
        card.push_str(&format!(
            "<div class=\"project-tech\">{}</div>",
            tags("tech-tag", &project.technologies)
        ));
    }

    let mut links = String::new();
    if let Some(github) = safe_url(project.github.as_ref()) {
        links.push_str(&external_link(
            github,
            "project-link github",
            &format!("{} Code", icon("fab fa-github")),
        ));
    }
    if let Some(demo) = safe_url(project.demo.as_ref()) {
        links.push_str(&external_link(
            demo,
            "project-link demo",
            &format!("{} Live Demo", icon("fas fa-external-link-alt")),
        ));
    }
    if !links.is_empty() {
        card.push_str(&format!("<div class=\"project-links\">{}</div>", links));
    }

    card.push_str("</div></div>");
    card
}

pub fn render_experience(experience: Option<&[Experience]>, empty_message: &str) -> Vec<DomOp> {
    let html = list_or_placeholder(experience, empty_message, |entry| {
        let mut item = String::from("<div class=\"timeline-item\">");
        item.push_str(&element("h3", "experience-position", &entry.position));
        if let Some(company) = non_blank(entry.company.as_ref()) {
            item.push_str(&element("div", "experience-company", company));
        }
        if let Some(duration) = non_blank(entry.duration.as_ref()) {
            item.push_str(&element("div", "experience-duration", duration));
        }
        if let Some(description) = non_blank(entry.description.as_ref()) {
            item.push_str(&element("p", "experience-description", description));
        }

        let achievements: String = entry
            .achievements
            .iter()
            .filter(|achievement| !achievement.trim().is_empty())
            .map(|achievement| format!("<li>{}</li>", text(achievement)))
            .collect();
        if !achievements.is_empty() {
            item.push_str(&format!(
                "<ul class=\"experience-achievements\">{}</ul>",
                achievements
            ));
        }

        item.push_str("</div>");
        item
    });
    vec![DomOp::html(anchor::EXPERIENCE_CONTAINER, html)]
}

pub fn render_education(education: Option<&[Education]>, empty_message: &str) -> Vec<DomOp> {
    let html = list_or_placeholder(education, empty_message, |entry| {
        let mut item = String::from("<div class=\"education-item\">");
        item.push_str(&element("h3", "education-degree", &entry.degree));
        if let Some(institution) = non_blank(entry.institution.as_ref()) {
            item.push_str(&element("div", "education-institution", institution));
        }
        if let Some(year) = non_blank(entry.year.as_ref()) {
            item.push_str(&element("div", "education-year", year));
        }
        if let Some(description) = non_blank(entry.description.as_ref()) {
            item.push_str(&element("p", "education-description", description));
        }
        item.push_str("</div>");
        item
    });
    vec![DomOp::html(anchor::EDUCATION_CONTAINER, html)]
}

/// Concatenated item markup, or the placeholder paragraph when there are no items
pub(crate) fn list_or_placeholder<T>(
    items: Option<&[T]>,
    empty_message: &str,
    render_item: impl Fn(&T) -> String,
) -> String {
    match items {
        Some(items) if !items.is_empty() => items.iter().map(render_item).collect(),
        _ => placeholder(empty_message),
    }
}
