use folio::anchor;
use folio::interaction::RigSettings;
use folio::*;
use tempfile::tempdir;

const PORTFOLIO: &str = r##"{
  "theme": {
    "primaryColor": "#2563eb",
    "accentColor": "#f59e0b",
    "backgroundColor": "#ffffff",
    "textColor": "#1f2937",
    "subtitleColor": "#6b7280",
    "cardColor": "#f9fafb"
  },
  "greeting": {
    "title": "Hi there, I'm",
    "subtitle": "I build reliable systems.",
    "resumeLink": "https://example.com/resume.pdf"
  },
  "personal": {
    "name": "Ada Lovelace",
    "title": "Software Engineer",
    "bio": "Writes programs for engines that do not exist yet.",
    "avatar": "ada.png",
    "email": "ada@example.com",
    "phone": "+44 20 7946 0000",
    "location": "London"
  },
  "social": {
    "github": "https://github.com/ada",
    "linkedin": null,
    "twitter": "",
    "mastodon": "https://hachyderm.io/@ada"
  },
  "about": {
    "description": "Mathematician.",
    "highlights": ["Analytical Engine", "First program"]
  },
  "skills": [
    { "category": "Languages", "items": ["Rust", "Go"] }
  ],
  "projects": [
    {
      "title": "X",
      "description": "Y",
      "image": "a.png",
      "technologies": ["Go"],
      "github": "http://g",
      "demo": null
    }
  ],
  "experience": [
    {
      "position": "Engineer",
      "company": "Analytical Engines",
      "duration": "1842 - 1843",
      "description": "Notes on the engine.",
      "achievements": ["Note G"]
    }
  ],
  "education": [
    { "degree": "Mathematics", "institution": "Home", "year": 1833, "description": "Tutored." }
  ],
  "achievements": [],
  "linkedInEvents": [
    {
      "title": "Ownership 101",
      "organization": "Rust Meetup",
      "date": "March 2024",
      "description": "A talk.",
      "type": "Live Session",
      "attendees": 120,
      "linkedInUrl": "https://linkedin.com/events/1"
    }
  ]
}"##;

fn extended_dom() -> MemoryDom {
    MemoryDom::with_anchors(anchor::required(Layout::Extended).iter().copied())
}

fn renderer(body: &str) -> PageRenderer<StaticSource> {
    PageRenderer::new(
        StaticSource::named("data.json", body),
        RenderOptions::for_layout(Layout::Extended).with_year(2025),
    )
}

#[tokio::test]
async fn test_full_render_into_memory_dom() {
    let mut dom = extended_dom();
    let outcome = renderer(PORTFOLIO).load(&mut dom).await;

    assert!(outcome.is_rendered());
    assert!(outcome.report().unwrap().is_clean());

    assert_eq!(dom.text(anchor::NAV_BRAND), Some("Ada"));
    assert_eq!(dom.text(anchor::GREETING_SUBTITLE), Some("I build reliable systems."));
    assert_eq!(
        dom.attr(anchor::RESUME_LINK, "href"),
        Some("https://example.com/resume.pdf")
    );
    assert_eq!(dom.style_var("--primary-color"), Some("#2563eb"));
    assert_eq!(dom.style_var("--card-bg"), Some("#f9fafb"));

    let projects = dom.html(anchor::PROJECTS_CONTAINER).unwrap();
    assert!(projects.contains("href=\"http://g\""));
    assert!(!projects.contains("Live Demo"));

    let achievements = dom.html(anchor::ACHIEVEMENTS_CONTAINER).unwrap();
    assert_eq!(achievements.matches("<p").count(), 1);
    assert!(achievements.contains("No achievements added yet."));
    assert!(!achievements.contains("achievement-card"));

    let events = dom.html(anchor::EVENTS_CONTAINER).unwrap();
    assert!(events.contains("event-type-badge live-session"));
    assert!(events.contains("120"));

    assert!(dom.html(anchor::EDUCATION_CONTAINER).unwrap().contains("1833"));
    assert_eq!(
        dom.text(anchor::FOOTER_TEXT),
        Some("© 2025 Ada Lovelace. All rights reserved.")
    );
}

#[tokio::test]
async fn test_social_links_skip_absent_urls() {
    let mut dom = extended_dom();
    renderer(PORTFOLIO).load(&mut dom).await;

    for target in [anchor::HERO_SOCIAL, anchor::FOOTER_SOCIAL] {
        let html = dom.html(target).unwrap();
        // github and mastodon present; linkedin null, twitter empty
        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains("title=\"github\""));
        assert!(html.contains("fab fa-github"));
        assert!(html.contains("title=\"mastodon\""));
        assert!(html.contains(render::FALLBACK_ICON));
        assert!(!html.contains("linkedin"));
        assert!(!html.contains("twitter"));
        assert!(html.find("github").unwrap() < html.find("mastodon").unwrap());
    }
}

#[tokio::test]
async fn test_render_is_idempotent() {
    let renderer = renderer(PORTFOLIO);

    let mut once = TemplateDom::builtin(Layout::Extended);
    renderer.load(&mut once).await;
    let first = once.html().to_string();

    renderer.load(&mut once).await;
    assert_eq!(once.html(), first);

    let mut fresh = TemplateDom::builtin(Layout::Extended);
    renderer.load(&mut fresh).await;
    assert_eq!(fresh.html(), first);
}

#[tokio::test]
async fn test_missing_theme_leaves_styles_untouched() {
    let mut dom = extended_dom();
    let outcome = renderer(r#"{"personal": {"name": "Ada"}}"#)
        .load(&mut dom)
        .await;

    assert!(outcome.is_rendered());
    assert!(dom.style_vars().is_empty());

    let mut page = TemplateDom::builtin(Layout::Extended);
    renderer(r#"{"personal": {"name": "Ada"}}"#)
        .load(&mut page)
        .await;
    assert!(!page.html().contains("--primary-color"));
}

#[tokio::test]
async fn test_theme_value_cannot_add_root_declarations() {
    let renderer = renderer(
        r##"{"theme": {"primaryColor": "red; background: url(x)", "accentColor": "#f59e0b"},
            "personal": {"name": "Ada"}}"##,
    );

    let mut page = TemplateDom::builtin(Layout::Extended);
    renderer.load(&mut page).await;
    let first = page.html().to_string();
    renderer.load(&mut page).await;

    assert_eq!(page.html(), first);
    assert!(!first.contains("url(x)"));
    assert!(first.contains("--accent-color: #f59e0b;"));
}

#[tokio::test]
async fn test_fetch_failures_show_error_panel() {
    let failures: Vec<Box<dyn DocumentSource>> = vec![
        Box::new(FailingSource::new("data.json", "HTTP status client error (404 Not Found)")),
        Box::new(StaticSource::new("{\"personal\": ")),
        Box::new(StaticSource::new("[]")),
        Box::new(StaticSource::new(r#"{"projects": []}"#)),
        Box::new(StaticSource::new(r#"{"personal": {"name": "  "}}"#)),
    ];

    for source in failures {
        let description = source.describe();
        let renderer = PageRenderer::new(source, RenderOptions::default());

        let mut dom = extended_dom();
        let outcome = renderer.load(&mut dom).await;
        assert!(!outcome.is_rendered(), "{}", description);
        assert_eq!(dom.body(), Some(render::ERROR_PANEL_HTML));
        assert!(dom.populated().is_empty());
        assert!(dom.style_vars().is_empty());

        let mut page = TemplateDom::builtin(Layout::Extended);
        renderer.load(&mut page).await;
        assert!(page.html().contains("Error Loading Portfolio"));
        for container in [
            anchor::SKILLS_CONTAINER,
            anchor::PROJECTS_CONTAINER,
            anchor::ACHIEVEMENTS_CONTAINER,
        ] {
            assert!(!page.has_anchor(container));
        }
    }
}

#[tokio::test]
async fn test_template_missing_anchor_skips_section() {
    let skeleton = TemplateDom::builtin(Layout::Basic)
        .html()
        .replace("id=\"skills-container\"", "id=\"renamed\"");
    let mut page = TemplateDom::new(skeleton);

    let renderer = PageRenderer::new(
        StaticSource::new(PORTFOLIO),
        RenderOptions::for_layout(Layout::Basic).with_year(2025),
    );
    let outcome = renderer.load(&mut page).await;

    let report = outcome.report().unwrap();
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].section, Section::Skills);
    assert!(page.html().contains("project-card"));
    assert!(page.html().contains("Software Engineer"));
    assert!(!page.html().contains("skill-tag"));
}

#[tokio::test]
async fn test_basic_layout_omits_showcase() {
    let mut dom = MemoryDom::with_anchors(anchor::required(Layout::Basic).iter().copied());
    let renderer = PageRenderer::new(
        StaticSource::new(PORTFOLIO),
        RenderOptions::for_layout(Layout::Basic).with_year(2025),
    );

    let outcome = renderer.load(&mut dom).await;

    assert!(outcome.is_rendered());
    assert_eq!(dom.text(anchor::HERO_TITLE), Some("Software Engineer"));
    assert_eq!(dom.style_var("--card-bg"), None);
    assert_eq!(dom.style_var("--primary-color"), Some("#2563eb"));
    assert!(!dom.has_anchor(anchor::ACHIEVEMENTS_CONTAINER));
}

#[tokio::test]
async fn test_site_render_from_config_file() {
    let temp = tempdir().unwrap();
    let dir = temp.path();
    std::fs::write(dir.join("data.json"), PORTFOLIO).unwrap();
    std::fs::write(
        dir.join("folio.yaml"),
        "data: data.json\noutput: out/index.html\nlayout: extended\nyear: 2024\nheader_offset: 64\n",
    )
    .unwrap();

    let folio = Folio::new(dir.join("folio.yaml")).await.unwrap();
    let page = folio.render().await.unwrap();

    assert!(page.outcome.is_rendered());
    assert!(page.html.contains("© 2024 Ada Lovelace. All rights reserved."));
    assert!(page.html.contains("data-folio-header-offset=\"64\""));

    let template = TemplateDom::new(page.html.clone());
    assert_eq!(template.missing_anchors(anchor::required(Layout::Extended)), Vec::<&str>::new());

    page.write_to(&folio.config().output).await.unwrap();
    let written = std::fs::read_to_string(dir.join("out/index.html")).unwrap();
    assert_eq!(written, page.html);

    let check = folio.check().await.unwrap();
    assert!(check.is_clean());
}

#[tokio::test]
async fn test_site_check_reports_problems() {
    let temp = tempdir().unwrap();
    let dir = temp.path();
    std::fs::write(
        dir.join("data.json"),
        r#"{"personal": {"name": "Ada"}, "skills": "Rust"}"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("index.html"),
        "<html><body><h1 id=\"hero-name\"></h1></body></html>",
    )
    .unwrap();
    std::fs::write(
        dir.join("folio.yaml"),
        "data: data.json\ntemplate: index.html\nlayout: basic\n",
    )
    .unwrap();

    let check = Folio::new(dir.join("folio.yaml"))
        .await
        .unwrap()
        .check()
        .await
        .unwrap();

    assert!(!check.is_clean());
    assert!(check.load_error.is_none());
    assert_eq!(check.faults.len(), 1);
    assert_eq!(check.faults[0].field, "skills");
    assert!(check.missing_anchors.contains(&anchor::SKILLS_CONTAINER));
    assert!(!check.missing_anchors.contains(&anchor::HERO_NAME));
}

#[tokio::test]
async fn test_site_missing_data_renders_error_page() {
    let temp = tempdir().unwrap();
    let dir = temp.path();
    std::fs::write(dir.join("folio.yaml"), "data: nowhere.json\n").unwrap();

    let folio = Folio::new(dir.join("folio.yaml")).await.unwrap();
    let page = folio.render().await.unwrap();

    assert!(matches!(page.outcome, RenderOutcome::Failed(LoadError::Transport { .. })));
    assert!(page.html.contains("Error Loading Portfolio"));
    assert!(!page.html.contains("id=\"projects-container\""));
}

#[test]
fn test_rig_settings_from_config() {
    let config = parse_config_string("layout: basic\nheader_offset: 72\ntyping:\n  interval_ms: 45\n").unwrap();
    let settings = RigSettings::from_config(&config);
    assert_eq!(settings.layout, Layout::Basic);
    assert_eq!(settings.header_offset, 72.0);
    assert_eq!(settings.typing.interval_ms, 45);
    assert_eq!(settings.typing.start_delay_ms, 500);
}
