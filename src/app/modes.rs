//! Add dialog state machine.
//!
//! The dialog is either [`DialogState::Closed`] or [`DialogState::Open`]. It
//! owns a draft name that is emptied on every transition, so an opened dialog
//! always starts blank and a closed one never carries stale text.
//!
//! ```text
//!            open()
//!   Closed ─────────▶ Open ──┐ push()/pop()
//!     ▲                │ ◀───┘
//!     └── confirm() ───┤
//!     └── dismiss() ───┘
//! ```

/// Visibility of the add dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    /// Dialog hidden; keystrokes edit the search query.
    #[default]
    Closed,

    /// Dialog shown; keystrokes edit the draft name.
    Open,
}

/// The add dialog and its draft name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddDialog {
    state: DialogState,
    draft: String,
}

impl AddDialog {
    #[must_use]
    pub const fn state(&self) -> DialogState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// `Closed → Open` with an empty draft. Returns `false` if already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.state = DialogState::Open;
        self.draft.clear();
        true
    }

    /// `Open → Closed`, discarding the draft. Returns `false` if already closed.
    pub fn dismiss(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = DialogState::Closed;
        self.draft.clear();
        true
    }

    /// `Open → Closed`, handing back the draft as typed.
    ///
    /// Returns `None` when the dialog was not open. The draft may be empty;
    /// deciding whether it is acceptable is the caller's job.
    pub fn confirm(&mut self) -> Option<String> {
        if !self.is_open() {
            return None;
        }
        self.state = DialogState::Closed;
        Some(std::mem::take(&mut self.draft))
    }

    /// Appends to the draft. Ignored while closed.
    pub fn push(&mut self, c: char) -> bool {
        if !self.is_open() {
            return false;
        }
        self.draft.push(c);
        true
    }

    /// Removes the last draft character. Ignored while closed or empty.
    pub fn pop(&mut self) -> bool {
        self.is_open() && self.draft.pop().is_some()
    }
}
