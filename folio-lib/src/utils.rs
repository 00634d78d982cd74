/// First whitespace-separated word of a name
pub(crate) fn first_word(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}

/// Convert a free-form label into a lowercase CSS class token
pub(crate) fn to_class_token(s: &str) -> String {
    let mut result = String::new();
    let mut pending_dash = false;

    for ch in s.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !result.is_empty() {
                result.push('-');
            }
            pending_dash = false;
            result.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    result
}

/// Non-blank contents of an optional string
pub(crate) fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_word() {
        assert_eq!(first_word("Ada Lovelace"), "Ada");
        assert_eq!(first_word("  Grace   Hopper "), "Grace");
        assert_eq!(first_word("Prince"), "Prince");
        assert_eq!(first_word(""), "");
    }

    #[test]
    fn test_to_class_token() {
        assert_eq!(to_class_token("Webinar"), "webinar");
        assert_eq!(to_class_token("Live Event"), "live-event");
        assert_eq!(to_class_token("\"><script>"), "script");
        assert_eq!(to_class_token("Q&A  Session!"), "q-a-session");
    }

    #[test]
    fn test_non_blank() {
        let blank = Some("  ".to_string());
        let value = Some("x".to_string());
        assert_eq!(non_blank(blank.as_ref()), None);
        assert_eq!(non_blank(value.as_ref()), Some("x"));
        assert_eq!(non_blank(None), None);
    }
}
