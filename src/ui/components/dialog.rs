//! Add dialog overlay.
//!
//! Drawn last, over the list, as a five-line framed box centred in the pane.

use crate::ui::helpers::{center_padding, char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DialogInfo;

const DIALOG_WIDTH: usize = 44;
const DIALOG_HEIGHT: usize = 5;

/// Renders the dialog box with its title and draft.
///
/// ```text
/// ┌─────────── Add item ───────────┐
/// │                                │
/// │  Name: 🍇 grape_               │
/// │                                │
/// └────────────────────────────────┘
/// ```
pub fn render_dialog(dialog: &DialogInfo, theme: &Theme, cols: usize, rows: usize) {
    let width = DIALOG_WIDTH.min(cols.saturating_sub(2)).max(12);
    let inner = width - 2;
    let col = center_padding(cols, width) + 1;
    let top = center_padding(rows, DIALOG_HEIGHT).max(1);
    let border = Theme::fg(&theme.colors.dialog_border);

    let title: String = dialog.title.chars().take(inner).collect();
    let title_len = char_width(&title);
    let left = center_padding(inner, title_len);

    position_cursor(top, col);
    print!("{border}┌{}", "─".repeat(left));
    print!("{}{title}{}", Theme::bold(), Theme::reset());
    print!("{border}{}┐{}", "─".repeat(inner - left - title_len), Theme::reset());

    for offset in [1, 3] {
        position_cursor(top + offset, col);
        print!("{border}│{}│{}", " ".repeat(inner), Theme::reset());
    }

    // Keep the tail of a long draft visible, like a scrolling input.
    let prompt = "  Name: ";
    let room = inner.saturating_sub(prompt.len() + 1);
    let draft_len = char_width(&dialog.draft);
    let shown: String = dialog.draft.chars().skip(draft_len.saturating_sub(room)).collect();
    let used = prompt.len() + char_width(&shown) + 1;

    position_cursor(top + 2, col);
    print!("{border}│{}", Theme::reset());
    print!("{}{prompt}{shown}_", Theme::fg(&theme.colors.text_normal));
    print!("{}", " ".repeat(inner.saturating_sub(used)));
    print!("{border}│{}", Theme::reset());

    position_cursor(top + 4, col);
    print!("{border}└{}┘{}", "─".repeat(inner), Theme::reset());
}
