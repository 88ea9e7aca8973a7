//! Small rendering helpers.

use unicode_width::UnicodeWidthChar;

/// Truncate a string to a display width, appending an ellipsis when cut.
///
/// Width is measured in terminal cells, not chars, so wide (CJK) glyphs
/// count double.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    // Reserve one cell for the ellipsis
    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_unchanged() {
        assert_eq!(truncate_to_width("Luke", 10), "Luke");
    }

    #[test]
    fn test_exact_fit_is_unchanged() {
        assert_eq!(truncate_to_width("Luke", 4), "Luke");
    }

    #[test]
    fn test_long_text_is_cut_with_ellipsis() {
        let out = truncate_to_width("https://swapi.dev/api/people/1/", 12);
        assert!(out.ends_with('\u{2026}'));
        assert!(out.chars().count() <= 12);
    }

    #[test]
    fn test_zero_width_yields_empty() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
