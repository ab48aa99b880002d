//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from the store, then
//! hand it to the components. Keeping the steps apart lets tests assert on
//! the view model without capturing stdout.

use crate::app::ListStore;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `store` - Current list store
/// * `rows` - Pane height in rows
/// * `cols` - Pane width in columns
///
/// # Example
///
/// ```rust
/// use basket::app::ListStore;
/// use basket::domain::SampleSet;
/// use basket::ui::{render, Theme};
///
/// let mut store = ListStore::new(SampleSet::default(), Theme::default());
/// store.seed();
/// render(&store, 24, 80);
/// ```
pub fn render(store: &ListStore, rows: usize, cols: usize) {
    let viewmodel = store.compute_viewmodel(rows, cols);
    components::render_screen(&viewmodel, &store.theme, cols, rows);
}
