use std::time::Duration;

pub const RIPPLE_BUTTON_SELECTOR: &str = ".btn";
pub const RIPPLE_CLASS: &str = "ripple";
/// How long a ripple span stays in the button
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);

pub const LAZY_IMAGE_SELECTOR: &str = "img[loading=\"lazy\"]";

/// A bounding box in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Geometry of one ripple, relative to its button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleSpan {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleSpan {
    /// Inline style for the span
    pub fn style(&self) -> [(&'static str, String); 4] {
        [
            ("width", format!("{}px", self.size)),
            ("height", format!("{}px", self.size)),
            ("left", format!("{}px", self.left)),
            ("top", format!("{}px", self.top)),
        ]
    }
}

pub struct Ripple;

impl Ripple {
    /// A square ripple covering the button's larger side, centered on the click
    pub fn at(button: Rect, client_x: f64, client_y: f64) -> RippleSpan {
        let size = button.width.max(button.height);
        RippleSpan {
            size,
            left: client_x - button.left - size / 2.0,
            top: client_y - button.top - size / 2.0,
        }
    }
}

/// Fallback loader for `loading="lazy"` images
pub struct LazyImages;

impl LazyImages {
    /// Only browsers without native lazy loading need the observer
    pub fn needs_fallback(native_supported: bool) -> bool {
        !native_supported
    }

    /// The `src` to set once an image intersects, if it carries a `data-src`
    pub fn source_on_intersect<'a>(
        is_intersecting: bool,
        data_src: Option<&'a str>,
    ) -> Option<&'a str> {
        if !is_intersecting {
            return None;
        }
        data_src.filter(|src| !src.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_centered_on_click() {
        let button = Rect {
            left: 100.0,
            top: 50.0,
            width: 120.0,
            height: 40.0,
        };
        let span = Ripple::at(button, 130.0, 60.0);

        assert_eq!(span.size, 120.0);
        assert_eq!(span.left, -30.0);
        assert_eq!(span.top, -50.0);
        assert_eq!(
            span.style(),
            [
                ("width", "120px".to_string()),
                ("height", "120px".to_string()),
                ("left", "-30px".to_string()),
                ("top", "-50px".to_string()),
            ]
        );
    }

    #[test]
    fn test_lazy_images_only_without_native_support() {
        assert!(!LazyImages::needs_fallback(true));
        assert!(LazyImages::needs_fallback(false));
    }

    #[test]
    fn test_lazy_source_swap() {
        assert_eq!(LazyImages::source_on_intersect(true, Some("a.png")), Some("a.png"));
        assert_eq!(LazyImages::source_on_intersect(false, Some("a.png")), None);
        assert_eq!(LazyImages::source_on_intersect(true, Some("")), None);
        assert_eq!(LazyImages::source_on_intersect(true, None), None);
    }
}
