//! Zellij plugin entry point.
//!
//! A thin shim over the `basket` library: it parses configuration, maps key
//! presses to library [`Event`](basket::Event)s according to the add dialog's
//! state, runs the handler, and executes the returned actions.
//!
//! # Keybindings
//!
//! Dialog closed:
//! - printable keys: edit the search query
//! - `Backspace`: delete the last query character
//! - `Down`/`Ctrl+n`, `Up`/`Ctrl+p`: move the selection
//! - `Ctrl+a`: open the add dialog
//! - `Ctrl+r`: add a random sample
//! - `Esc`: clear the query, or close the pane when it is empty
//! - `Ctrl+q`: close the pane
//!
//! Dialog open:
//! - printable keys: edit the draft name
//! - `Backspace`: delete the last draft character
//! - `Enter`: add the draft and close the dialog
//! - `Esc`: close the dialog without adding
//! - `Ctrl+r`: add a random sample, leaving the dialog open
//!
//! The plugin only builds for the wasm target; a native build produces a
//! stub binary so the library's tests can run on the host.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use basket::{handle_event, Action, Config, Event, ListStore};

    pub struct State {
        store: ListStore,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                store: basket::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            basket::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();
            tracing::debug!(samples = config.samples.len(), title = %config.title, "parsed configuration");

            self.store = basket::initialize(&config);
            subscribe(&[EventType::Key]);

            tracing::debug!("plugin load complete");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let zellij_tile::prelude::Event::Key(key) = event else {
                return false;
            };
            let _guard = tracing::debug_span!("plugin_update", key = ?key.bare_key).entered();

            let Some(our_event) = self.map_key_event(&key) else {
                return false;
            };

            match handle_event(&mut self.store, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render, "event handled");
                    for action in actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::debug!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            basket::ui::render(&self.store, rows, cols);
        }
    }

    impl State {
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
            let alt = key.has_modifiers(&[KeyModifier::Alt]);

            if ctrl && key.bare_key == BareKey::Char('r') {
                return Some(Event::AddRandom);
            }

            if self.store.dialog().is_open() {
                return match key.bare_key {
                    BareKey::Enter => Some(Event::Confirm),
                    BareKey::Esc => Some(Event::Escape),
                    BareKey::Backspace => Some(Event::Backspace),
                    BareKey::Char(c) if !ctrl && !alt => Some(Event::Char(c)),
                    _ => None,
                };
            }

            if ctrl {
                return match key.bare_key {
                    BareKey::Char('n') => Some(Event::KeyDown),
                    BareKey::Char('p') => Some(Event::KeyUp),
                    BareKey::Char('a') => Some(Event::AddRequested),
                    BareKey::Char('q') => Some(Event::CloseFocus),
                    _ => None,
                };
            }

            match key.bare_key {
                BareKey::Down => Some(Event::KeyDown),
                BareKey::Up => Some(Event::KeyUp),
                BareKey::Esc => Some(Event::Escape),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Char(c) if !alt => Some(Event::Char(c)),
                _ => None,
            }
        }

        fn execute_action(action: Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                }
            }
        }
    }
}

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(plugin::State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("basket is a Zellij plugin; build it with --target wasm32-wasip1");
}
