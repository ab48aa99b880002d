//! The list store and view model computation.
//!
//! [`ListStore`] is the single owner of the canonical item list, the search
//! query and the add dialog. Everything else reads from it. The filtered view
//! is derived state: [`ListStore::recompute`] rebuilds it from scratch after
//! every change to the list or the query.
//!
//! # State Components
//!
//! - **Items**: Canonical list, insertion order, append-only
//! - **Query**: Current search text, replaced wholesale
//! - **Filtered**: Items matching the query, in list order
//! - **Selection**: Cursor within the filtered items
//! - **Dialog**: Add dialog state and its draft name
//!
//! # Example
//!
//! ```rust
//! use basket::app::ListStore;
//! use basket::domain::SampleSet;
//! use basket::ui::theme::Theme;
//!
//! let mut store = ListStore::new(SampleSet::default(), Theme::default());
//! store.seed();
//! store.set_query("an");
//! assert_eq!(store.filtered().len(), 1);
//! ```

use super::filter::{filter_items, match_range};
use super::modes::AddDialog;
use super::providers::{IdProvider, RandomProvider, StdRandom, UuidIds};
use crate::domain::{Item, ItemId, SampleSet};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DialogInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
};

/// Rows taken by everything except the item list: blank line, header,
/// border, three-line search box, column headers, border, footer.
const CHROME_ROWS: usize = 9;

/// Width of the name column, in characters.
const NAME_COLUMN_WIDTH: usize = 40;

/// Title shown in the header when none is configured.
pub const DEFAULT_TITLE: &str = "Basket";

/// Central state container for the list screen.
#[derive(Debug)]
pub struct ListStore {
    items: Vec<Item>,
    filtered: Vec<Item>,
    query: String,
    selected_index: usize,
    dialog: AddDialog,
    samples: SampleSet,
    seeded: bool,
    ids: Box<dyn IdProvider>,
    random: Box<dyn RandomProvider>,

    /// Header title.
    pub title: String,

    /// Color scheme used by the renderer.
    pub theme: Theme,
}

impl ListStore {
    /// Creates an empty, unseeded store with entropy-backed providers.
    #[must_use]
    pub fn new(samples: SampleSet, theme: Theme) -> Self {
        Self::with_providers(
            samples,
            theme,
            Box::new(UuidIds),
            Box::new(StdRandom::from_entropy()),
        )
    }

    /// Creates an empty, unseeded store with the given providers.
    #[must_use]
    pub fn with_providers(
        samples: SampleSet,
        theme: Theme,
        ids: Box<dyn IdProvider>,
        random: Box<dyn RandomProvider>,
    ) -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            selected_index: 0,
            dialog: AddDialog::default(),
            samples,
            seeded: false,
            ids,
            random,
            title: DEFAULT_TITLE.to_string(),
            theme,
        }
    }

    /// Canonical list in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items matching the current query, in list order.
    #[must_use]
    pub fn filtered(&self) -> &[Item] {
        &self.filtered
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub const fn dialog(&self) -> &AddDialog {
        &self.dialog
    }

    #[must_use]
    pub const fn samples(&self) -> &SampleSet {
        &self.samples
    }

    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Fills the list with one item per sample entry.
    ///
    /// Runs once per store. Later calls leave the list alone and return
    /// `false`.
    pub fn seed(&mut self) -> bool {
        if self.seeded {
            tracing::debug!("store already seeded, skipping");
            return false;
        }
        self.seeded = true;

        let samples = self.samples.entries().to_vec();
        for name in samples {
            let id = self.ids.next_id();
            self.items.push(Item::new(id, name));
        }

        tracing::debug!(item_count = self.items.len(), "store seeded");
        self.recompute();
        true
    }

    /// Replaces the search query and refilters.
    ///
    /// Returns whether the query text actually changed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        let changed = query != self.query;
        self.query = query;

        tracing::trace!(query = %self.query, changed, "search query set");
        self.recompute();
        changed
    }

    /// Appends a uniformly random sample entry.
    pub fn add_random(&mut self) -> ItemId {
        let index = self.random.pick_index(self.samples.len());
        let name = self.samples.get_wrapped(index).to_string();
        tracing::debug!(sample_index = index, name = %name, "random add");
        self.append(name)
    }

    /// Appends an item with a caller-supplied name.
    ///
    /// Absent, empty and whitespace-only names are ignored and return
    /// `None`. Accepted names are stored trimmed.
    pub fn add_named(&mut self, name: Option<&str>) -> Option<ItemId> {
        let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            tracing::debug!("named add rejected: blank name");
            return None;
        };
        Some(self.append(name.to_string()))
    }

    fn append(&mut self, name: String) -> ItemId {
        let id = self.ids.next_id();
        tracing::debug!(item_id = %id, name = %name, total = self.items.len() + 1, "item appended");
        self.items.push(Item::new(id, name));
        self.recompute();
        id
    }

    /// Rebuilds the filtered view from the list and query, then clamps the
    /// selection into it.
    pub fn recompute(&mut self) {
        let _span = tracing::debug_span!(
            "recompute",
            total_items = self.items.len(),
            query_len = self.query.len()
        )
        .entered();

        self.filtered = filter_items(&self.items, &self.query);

        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }

        tracing::debug!(filtered_count = self.filtered.len(), "filter applied");
    }

    /// Opens the add dialog. Returns `false` if it was already open.
    pub fn open_dialog(&mut self) -> bool {
        self.dialog.open()
    }

    /// Closes the add dialog without adding. Returns `false` if it was closed.
    pub fn dismiss_dialog(&mut self) -> bool {
        self.dialog.dismiss()
    }

    /// Closes the add dialog and adds its draft as a named item.
    ///
    /// The dialog closes even when the draft is blank; in that case nothing
    /// is added and `None` is returned.
    pub fn confirm_dialog(&mut self) -> Option<ItemId> {
        let draft = self.dialog.confirm()?;
        self.add_named(Some(&draft))
    }

    pub fn push_draft(&mut self, c: char) -> bool {
        self.dialog.push(c)
    }

    pub fn pop_draft(&mut self) -> bool {
        self.dialog.pop()
    }

    /// Moves the selection down one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
    }

    /// Moves the selection up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.filtered.get(self.selected_index)
    }

    /// Computes a renderable view model for a pane of `rows` × `cols`.
    ///
    /// The visible window is centred on the selection and shifted back when
    /// it would run past the end of the filtered list.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let available_rows = rows.saturating_sub(CHROME_ROWS);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered.len());
        if visible_end - visible_start < available_rows && self.filtered.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items = self.filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, item)| self.compute_display_item(item, visible_start + offset, cols))
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: SearchBarInfo {
                query: self.query.clone(),
            },
            empty_state: self.compute_empty_state(),
            dialog: self.dialog.is_open().then(|| DialogInfo {
                title: " Add item ".to_string(),
                draft: self.dialog.draft().to_string(),
            }),
        }
    }

    fn compute_display_item(&self, item: &Item, absolute_idx: usize, cols: usize) -> DisplayItem {
        let name_width = NAME_COLUMN_WIDTH.min(cols.saturating_sub(10)).max(4);
        let char_count = item.name.chars().count();

        let name = if char_count > name_width {
            let kept: String = item.name.chars().take(name_width - 3).collect();
            format!("{kept}...")
        } else {
            item.name.clone()
        };
        let visible_chars = name.chars().count();

        let highlight_ranges = match_range(&item.name, &self.query)
            .map(|(start, end)| (start, end.min(visible_chars)))
            .filter(|(start, end)| start < end)
            .into_iter()
            .collect();

        DisplayItem {
            name,
            key: item.id.short(),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " {} ({}/{}) ",
                self.title,
                self.filtered.len(),
                self.items.len()
            ),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.dialog.is_open() {
            "Type a name  Enter: add  Ctrl+r: random  Esc: cancel"
        } else if self.query.is_empty() {
            "Type to search  Up/Down: navigate  Ctrl+a: add  Ctrl+r: random  Esc: quit"
        } else {
            "Type to search  Up/Down: navigate  Ctrl+a: add  Ctrl+r: random  Esc: clear"
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.filtered.is_empty() {
            return None;
        }
        Some(if self.items.is_empty() {
            EmptyState {
                message: "No items yet".to_string(),
                subtitle: "Press Ctrl+a to add one".to_string(),
            }
        } else {
            EmptyState {
                message: format!("Nothing matches \"{}\"", self.query),
                subtitle: "Press Esc to clear the search".to_string(),
            }
        })
    }
}
