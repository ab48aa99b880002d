//! Shared rendering utilities.
//!
//! Cursor positioning, padding, and match highlighting. Widths are counted
//! in characters, which is close enough for the list's emoji-prefixed names.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Left padding that centres `text_width` within `cols`.
#[must_use]
pub const fn center_padding(cols: usize, text_width: usize) -> usize {
    cols.saturating_sub(text_width) / 2
}

/// `text` padded on both sides to fill `cols`, centred.
#[must_use]
pub fn centered_line(text: &str, cols: usize) -> String {
    let width = char_width(text);
    let left = center_padding(cols, width);
    let right = cols.saturating_sub(left + width);
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Prints `text` with the character ranges in `ranges` highlighted.
///
/// `ranges` are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. On a selected row the selection colors are restored
/// after each highlight so the row background stays continuous.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let plain: String = chars[current_pos..start].iter().collect();
            print!("{plain}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted: String = chars[start..end].iter().collect();
        print!("{highlighted}");
        print!("{}", Theme::reset());

        if is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
