//! Event handling and state transition logic.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The shim translates a Zellij key into an [`Event`]
//! 2. [`handle_event`] pattern-matches the event
//! 3. The store is mutated through `ListStore` methods, which refilter
//! 4. A render flag and any [`Action`]s are returned to the shim
//!
//! # Event Types
//!
//! - **Intents**: `QueryChanged`, `AddRequested`, `AddConfirmed`,
//!   `AddDismissed`, `AddRandom`
//! - **Keystrokes**: `Char`, `Backspace`, `Confirm`, `Escape`, routed to the
//!   query or the dialog draft depending on dialog state
//! - **Navigation**: `KeyUp`, `KeyDown`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use basket::app::{handle_event, Event, ListStore};
//! use basket::domain::SampleSet;
//! use basket::ui::theme::Theme;
//!
//! let mut store = ListStore::new(SampleSet::default(), Theme::default());
//! store.seed();
//! let (render, actions) = handle_event(&mut store, &Event::Char('a'))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! assert_eq!(store.query(), "a");
//! # Ok::<(), basket::BasketError>(())
//! ```

use crate::app::{Action, ListStore};
use crate::domain::error::Result;

/// User intents and keystrokes delivered by the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection down one row (wraps to top).
    KeyDown,
    /// Moves the selection up one row (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Replaces the search query.
    QueryChanged(String),
    /// Opens the add dialog.
    AddRequested,
    /// Closes the add dialog and adds the given name, if it is not blank.
    AddConfirmed(Option<String>),
    /// Closes the add dialog without adding.
    AddDismissed,
    /// Appends a random sample entry. Leaves the dialog as it is.
    AddRandom,

    /// Typed character: edits the draft while the dialog is open, the query
    /// otherwise.
    Char(char),
    /// Deletes the last character of the draft or the query.
    Backspace,
    /// Enter: confirms the dialog draft. Ignored with the dialog closed.
    Confirm,
    /// Esc: dismisses the dialog, else clears the query, else closes the pane.
    Escape,
}

/// Processes an event, mutates the store and returns actions to execute.
///
/// The returned flag tells the shim whether the pane needs a re-render.
///
/// # Errors
///
/// No current event fails; the `Result` keeps the shim's error path uniform.
#[allow(clippy::unnecessary_wraps)]
pub fn handle_event(store: &mut ListStore, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            store.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            store.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::QueryChanged(text) => Ok((store.set_query(text.clone()), vec![])),
        Event::AddRequested => {
            let opened = store.open_dialog();
            tracing::debug!(opened, "add dialog requested");
            Ok((opened, vec![]))
        }
        Event::AddConfirmed(name) => {
            store.dismiss_dialog();
            let added = store.add_named(name.as_deref());
            tracing::debug!(added = ?added, "add confirmed");
            Ok((true, vec![]))
        }
        Event::AddDismissed => Ok((store.dismiss_dialog(), vec![])),
        Event::AddRandom => {
            store.add_random();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if store.dialog().is_open() {
                return Ok((store.push_draft(*c), vec![]));
            }
            let mut query = store.query().to_string();
            query.push(*c);
            store.set_query(query);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if store.dialog().is_open() {
                return Ok((store.pop_draft(), vec![]));
            }
            let mut query = store.query().to_string();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }
            store.set_query(query);
            Ok((true, vec![]))
        }
        Event::Confirm => {
            if !store.dialog().is_open() {
                return Ok((false, vec![]));
            }
            let added = store.confirm_dialog();
            tracing::debug!(added = ?added, "dialog confirmed");
            Ok((true, vec![]))
        }
        Event::Escape => {
            if store.dismiss_dialog() {
                tracing::debug!("add dialog dismissed");
                return Ok((true, vec![]));
            }
            if store.query().is_empty() {
                return Ok((false, vec![Action::CloseFocus]));
            }
            store.set_query(String::new());
            Ok((true, vec![]))
        }
    }
}
