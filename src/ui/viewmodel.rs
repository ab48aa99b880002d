//! View model types representing renderable UI state.
//!
//! View models are computed by `ListStore::compute_viewmodel()` and consumed
//! by the renderer. They hold display-ready data only: the visible window of
//! items, which row is selected, where the query matched, and what the
//! header, footer and dialog should say.
//!
//! # Example
//!
//! ```rust
//! use basket::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     display_items: vec![DisplayItem {
//!         name: "🍌 banana".to_string(),
//!         key: "3f2a9c01".to_string(),
//!         is_selected: true,
//!         highlight_ranges: vec![(2, 5)],
//!     }],
//!     selected_index: 0,
//!     header: HeaderInfo { title: " Basket (1/3) ".to_string() },
//!     footer: FooterInfo { keybindings: "Ctrl+a: add".to_string() },
//!     search_bar: SearchBarInfo { query: "ban".to_string() },
//!     empty_state: None,
//!     dialog: None,
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Visible window of the filtered list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// The search box is always on screen.
    pub search_bar: SearchBarInfo,

    /// Set when the filtered list is empty.
    pub empty_state: Option<EmptyState>,

    /// Set while the add dialog is open.
    pub dialog: Option<DialogInfo>,
}

/// One row of the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Item name, truncated to the name column.
    pub name: String,

    /// Short form of the item id.
    pub key: String,

    pub is_selected: bool,

    /// Character ranges of `name` that matched the query.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current dialog state.
    pub keybindings: String,
}

/// Message shown in place of the list when nothing is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current query; empty renders the placeholder.
    pub query: String,
}

/// Add dialog contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogInfo {
    pub title: String,
    pub draft: String,
}
