//! Shared text utilities for fixed-width rendering
//!
//! Widths are measured in terminal display columns, not bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to text that had to be cut
pub const ELLIPSIS: &str = "...";

/// Display width of `text` in columns
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cut `text` so it fits within `max_width` columns.
///
/// Text that already fits is returned unchanged. Longer text keeps its first
/// `max_width - 3` columns (at least one character) followed by `...`.
///
/// # Example
/// ```
/// use typegram::core::truncate_with_ellipsis;
///
/// assert_eq!(truncate_with_ellipsis("Hello", 10), "Hello");
/// assert_eq!(truncate_with_ellipsis("Hello, world", 8), "Hello...");
/// ```
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }

    let keep = max_width.saturating_sub(ELLIPSIS.len()).max(1);
    let mut truncated = String::new();
    let mut used = 0;

    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > keep {
            break;
        }
        truncated.push(c);
        used += w;
    }

    truncated.push_str(ELLIPSIS);
    truncated
}

/// Left-align `text` in a field of `width` columns, truncating if needed
pub fn pad_to_width(text: &str, width: usize) -> String {
    let fitted = truncate_with_ellipsis(text, width);
    let padding = width.saturating_sub(display_width(&fitted));
    format!("{}{}", fitted, " ".repeat(padding))
}

/// Center `text` in a field of `width` columns, truncating if needed.
///
/// When the slack is odd the extra space goes on the right.
pub fn center_in_width(text: &str, width: usize) -> String {
    let fitted = truncate_with_ellipsis(text, width);
    let total_padding = width.saturating_sub(display_width(&fitted));
    let left = total_padding / 2;
    let right = total_padding - left;
    format!("{}{}{}", " ".repeat(left), fitted, " ".repeat(right))
}
