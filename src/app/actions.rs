//! Side effects requested by the event handler.
//!
//! The handler mutates the store directly; anything that has to reach
//! outside the plugin (the Zellij host) is returned as an [`Action`] for the
//! shim to execute.

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent on `Ctrl+q`, or on `Esc` with no dialog open and an empty query.
    CloseFocus,
}
