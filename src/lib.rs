//! Basket: a Zellij plugin showing a searchable list of named items.
//!
//! The screen holds a list of items, each with a random UUID and a display
//! name. Typing filters the list by case-insensitive substring. `Ctrl+r`
//! appends a random entry from a fixed sample set and `Ctrl+a` opens a small
//! dialog for adding an item by name.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Key mapping
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and actions                       │
//! │  - ListStore: items, query, filtered view           │
//! │  - Add dialog state machine                         │
//! │  - Id and random providers                          │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐       ┌───────────────────────┐
//! │ UI Layer (ui/)        │       │ Domain (domain/)      │
//! │ - View model          │       │ - Item, ItemId        │
//! │ - Components, themes  │       │ - SampleSet, errors   │
//! └───────────────────────┘       └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure + Observability                     │
//! │  - Host paths, OTLP file tracing                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/basket.wasm" {
//!         samples "🍌 banana, 🍏 apple, 🍉 watermelon"
//!         title "Fruit"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use basket::{handle_event, initialize, Config, Event};
//!
//! let mut store = initialize(&Config::default());
//! assert_eq!(store.items().len(), 3);
//!
//! handle_event(&mut store, &Event::QueryChanged("an".to_string()))?;
//! assert_eq!(store.filtered()[0].name, "🍌 banana");
//! # Ok::<(), basket::BasketError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AddDialog, DialogState, Event, ListStore};
pub use domain::{BasketError, Item, ItemId, Result, SampleSet};
pub use ui::Theme;

use infrastructure::expand_tilde;
use std::collections::BTreeMap;

/// Plugin configuration, parsed from the Zellij configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Entries used for seeding and random adds.
    pub samples: SampleSet,

    /// Header title.
    pub title: String,

    /// Built-in theme name (e.g. `catppuccin-latte`).
    pub theme_name: Option<String>,

    /// Path to a TOML theme file. Wins over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            samples: SampleSet::default(),
            title: app::DEFAULT_TITLE.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the configuration, rejecting invalid values.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::Config`] when `samples` has no non-blank entry
    /// or `title` is blank.
    pub fn try_from_zellij(config: &BTreeMap<String, String>) -> Result<Self> {
        let samples = match config.get("samples") {
            Some(raw) => SampleSet::parse(raw)?,
            None => SampleSet::default(),
        };

        let title = match config.get("title").map(|t| t.trim()) {
            Some("") => return Err(BasketError::Config("title must not be blank".to_string())),
            Some(t) => t.to_string(),
            None => app::DEFAULT_TITLE.to_string(),
        };

        Ok(Self {
            samples,
            title,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        })
    }

    /// Parses the configuration, replacing each invalid value with its
    /// default.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let samples = config
            .get("samples")
            .map_or(Ok(defaults.samples.clone()), |raw| SampleSet::parse(raw))
            .unwrap_or_else(|e| {
                tracing::debug!(error = %e, "invalid samples, using defaults");
                defaults.samples
            });

        let title = config
            .get("title")
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map_or(defaults.title, str::to_string);

        Self {
            samples,
            title,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Resolves the theme: file first, then built-in name, then default.
    /// Load failures are logged and fall through to the default.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(file) = &self.theme_file {
            match Theme::from_file(expand_tilde(file)) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::debug!(theme_file = %file, error = %e, "failed to load theme file, using default");
                    return Theme::default();
                }
            }
        }

        self.theme_name.as_deref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|e| {
                tracing::debug!(theme_name = %name, error = %e, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds a seeded store from `config` with production providers.
#[must_use]
pub fn initialize(config: &Config) -> ListStore {
    let _span = tracing::debug_span!("initialize", samples = config.samples.len()).entered();

    let mut store = ListStore::new(config.samples.clone(), config.resolve_theme());
    store.title.clone_from(&config.title);
    store.seed();

    tracing::debug!(item_count = store.items().len(), "store initialized");
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
        assert_eq!(Config::try_from_zellij(&BTreeMap::new()).unwrap(), Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::try_from_zellij(&map(&[
            ("samples", "kiwi, fig ,, plum"),
            ("title", "  Fruit "),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.samples.entries(), ["kiwi", "fig", "plum"]);
        assert_eq!(config.title, "Fruit");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn strict_parse_rejects_blank_values() {
        let err = Config::try_from_zellij(&map(&[("samples", " , ")])).unwrap_err();
        assert!(matches!(err, BasketError::Config(_)));

        let err = Config::try_from_zellij(&map(&[("title", "   ")])).unwrap_err();
        assert!(matches!(err, BasketError::Config(_)));
    }

    #[test]
    fn lenient_parse_falls_back_per_key() {
        let config = Config::from_zellij(&map(&[("samples", ","), ("title", ""), ("trace_level", "warn")]));

        assert_eq!(config.samples, SampleSet::default());
        assert_eq!(config.title, app::DEFAULT_TITLE);
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme().name, Theme::default().name);
    }

    #[test]
    fn theme_file_wins_over_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let latte = include_str!("../themes/catppuccin-latte.toml").replace("name = \"catppuccin-latte\"", "name = \"custom\"");
        std::fs::write(&path, latte).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            theme_file: Some(path.to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme().name, "custom");
    }

    #[test]
    fn initialize_seeds_and_titles_the_store() {
        let config = Config {
            samples: SampleSet::parse("kiwi, fig").unwrap(),
            title: "Fruit".to_string(),
            ..Config::default()
        };
        let store = initialize(&config);

        let names: Vec<&str> = store.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["kiwi", "fig"]);
        assert_eq!(store.filtered().len(), 2);
        assert_eq!(store.title, "Fruit");
        assert!(store.is_seeded());
    }
}
