//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with visible/total counts
//! - [`search`]: Always-visible search box
//! - [`list`]: Item rows with match highlighting
//! - [`empty`]: Message shown when nothing is visible
//! - [`dialog`]: Add dialog overlay
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Column Headers]
//! [Rows or Empty State]
//! [Border]
//! [Footer]
//! ```
//!
//! The add dialog, when open, is drawn last on top of the list.

mod dialog;
mod empty;
mod footer;
mod header;
mod list;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use dialog::render_dialog;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::{render_list_headers, render_list_rows};
use search::render_search_bar;

/// Renders a horizontal separator line. Returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole screen for `vm` into a pane of `cols` × `rows`.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_list_headers(current_row, theme);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_list_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_row = rows.saturating_sub(1).max(1);
    render_border(footer_row.saturating_sub(1).max(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(dialog) = &vm.dialog {
        render_dialog(dialog, theme, cols, rows);
    }
}
