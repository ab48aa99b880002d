//! Application layer coordinating the store, events, and actions.
//!
//! ```text
//! Key → Event → handle_event → ListStore mutation → recompute → render
//!                                      │
//!                                      └──▶ Actions → Zellij host
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Case-insensitive substring filter and match ranges
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Add dialog state machine
//! - [`providers`]: Injected id and randomness sources
//! - [`state`]: The list store and view model computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod providers;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{AddDialog, DialogState};
pub use providers::{IdProvider, RandomProvider, StdRandom, UuidIds};
pub use state::{ListStore, DEFAULT_TITLE};
