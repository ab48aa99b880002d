//! Domain layer for the Basket plugin.
//!
//! Core types that know nothing about Zellij or rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: The list item and its identifier
//! - [`samples`]: The fixed sample set used for seeding and random adds

pub mod error;
pub mod item;
pub mod samples;

pub use error::{BasketError, Result};
pub use item::{Item, ItemId};
pub use samples::{SampleSet, DEFAULT_SAMPLES};
