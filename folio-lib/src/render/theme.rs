use super::DomOp;
use crate::config::Layout;
use crate::document::Theme;

/// Style variables a layout may write, paired with their theme value
pub fn theme_variables(theme: &Theme, layout: Layout) -> Vec<(&'static str, Option<&String>)> {
    let mut variables = vec![
        ("--primary-color", theme.primary_color.as_ref()),
        ("--accent-color", theme.accent_color.as_ref()),
        ("--background-color", theme.background_color.as_ref()),
        ("--text-color", theme.text_color.as_ref()),
    ];
    if layout == Layout::Extended {
        variables.push(("--subtitle-color", theme.subtitle_color.as_ref()));
        variables.push(("--card-bg", theme.card_color.as_ref()));
    }
    variables
}

/// Whether a value stays inside its own declaration of the root `style`
pub fn is_safe_css_value(value: &str) -> bool {
    !value.contains(&[';', '{', '}'][..])
}

/// Without a theme nothing is written and the stylesheet defaults stay in effect.
/// Individual absent colors are skipped rather than written empty, and so are
/// values that would add declarations of their own.
pub fn render_theme(theme: Option<&Theme>, layout: Layout) -> Vec<DomOp> {
    let Some(theme) = theme else {
        return Vec::new();
    };

    theme_variables(theme, layout)
        .into_iter()
        .filter_map(|(name, value)| {
            let value = crate::utils::non_blank(value)?.trim();
            if !is_safe_css_value(value) {
                tracing::warn!(variable = name, value, "dropping theme value");
                return None;
            }
            Some(DomOp::SetStyleVar {
                name,
                value: value.to_string(),
            })
        })
        .collect()
}
