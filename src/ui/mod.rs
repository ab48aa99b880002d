//! User interface rendering layer.
//!
//! ```text
//! ListStore → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor, padding and highlight utilities
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DialogInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
};
