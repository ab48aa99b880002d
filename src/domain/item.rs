//! Item domain model.
//!
//! An [`Item`] is one row of the list: a display name plus an opaque
//! identifier assigned when the item is created.
//!
//! # Invariants
//! - `id` is stable for the item's lifetime and never reused.
//! - `id` carries identity only; list order is insertion order.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of an [`Item`].
///
/// Wraps a random v4 UUID and displays in the standard hyphenated layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Draws a fresh random identifier.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, used as the key column in the list.
    #[must_use]
    pub fn short(&self) -> String {
        let mut simple = self.0.simple().to_string();
        simple.truncate(8);
        simple
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

/// One entry of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

impl Item {
    /// Creates an item with an already generated identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use basket::domain::{Item, ItemId};
    ///
    /// let item = Item::new(ItemId::new_v4(), "🍏 apple");
    /// assert_eq!(item.name, "🍏 apple");
    /// ```
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_hyphenated_uuid_layout() {
        let id = ItemId(Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef));
        assert_eq!(id.to_string(), "01234567-89ab-cdef-0123-456789abcdef");
    }

    #[test]
    fn short_takes_leading_hex_digits() {
        let id = ItemId(Uuid::from_u128(0xdead_beef_0000_4000_8000_0000_0000_0001));
        assert_eq!(id.short(), "deadbeef");
    }
}
