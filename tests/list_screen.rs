//! End-to-end flows through `handle_event` with deterministic providers.

use std::collections::HashSet;

use basket::app::{IdProvider, RandomProvider, UuidIds};
use basket::{handle_event, Action, DialogState, Event, ItemId, ListStore, SampleSet, Theme};
use uuid::Uuid;

#[derive(Debug, Default)]
struct SequentialIds(u128);

impl IdProvider for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        self.0 += 1;
        ItemId(Uuid::from_u128(self.0))
    }
}

/// Replays a fixed list of picks, wrapping around.
#[derive(Debug)]
struct ScriptedPicks {
    picks: Vec<usize>,
    next: usize,
}

impl RandomProvider for ScriptedPicks {
    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;
        pick % len
    }
}

fn seeded_store(picks: Vec<usize>) -> ListStore {
    let mut store = ListStore::with_providers(
        SampleSet::default(),
        Theme::default(),
        Box::new(SequentialIds::default()),
        Box::new(ScriptedPicks { picks, next: 0 }),
    );
    store.seed();
    store
}

fn names(items: &[basket::Item]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

fn send(store: &mut ListStore, event: Event) -> (bool, Vec<Action>) {
    handle_event(store, &event).unwrap()
}

#[test]
fn query_an_keeps_only_banana() {
    let mut store = seeded_store(vec![0]);

    send(&mut store, Event::QueryChanged("an".to_string()));

    assert_eq!(names(store.filtered()), ["🍌 banana"]);
}

#[test]
fn empty_query_shows_everything_in_order() {
    let mut store = seeded_store(vec![0]);

    send(&mut store, Event::QueryChanged("an".to_string()));
    send(&mut store, Event::QueryChanged(String::new()));

    assert_eq!(names(store.filtered()), ["🍌 banana", "🍏 apple", "🍉 watermelon"]);
}

#[test]
fn typed_query_is_case_insensitive() {
    let mut store = seeded_store(vec![0]);

    for c in "APP".chars() {
        send(&mut store, Event::Char(c));
    }

    assert_eq!(store.query(), "APP");
    assert_eq!(names(store.filtered()), ["🍏 apple"]);
}

#[test]
fn named_add_through_dialog_then_search() {
    let mut store = seeded_store(vec![0]);

    send(&mut store, Event::AddRequested);
    assert_eq!(store.dialog().state(), DialogState::Open);
    for c in "🍇 grape".chars() {
        send(&mut store, Event::Char(c));
    }
    send(&mut store, Event::Confirm);

    assert_eq!(store.dialog().state(), DialogState::Closed);
    assert_eq!(store.dialog().draft(), "");
    assert_eq!(store.items().len(), 4);
    assert_eq!(store.items()[3].id, ItemId(Uuid::from_u128(4)));

    send(&mut store, Event::QueryChanged("grape".to_string()));
    assert_eq!(names(store.filtered()), ["🍇 grape"]);
}

#[test]
fn blank_confirm_closes_dialog_without_adding() {
    let mut store = seeded_store(vec![0]);

    send(&mut store, Event::AddRequested);
    send(&mut store, Event::Confirm);

    assert_eq!(store.items().len(), 3);
    assert_eq!(store.dialog().state(), DialogState::Closed);
}

#[test]
fn whitespace_only_name_is_rejected() {
    let mut store = seeded_store(vec![0]);

    send(&mut store, Event::AddConfirmed(Some("   ".to_string())));
    send(&mut store, Event::AddConfirmed(None));

    assert_eq!(store.items().len(), 3);
}

#[test]
fn dismissed_draft_is_gone_on_reopen() {
    let mut store = seeded_store(vec![0]);

    send(&mut store, Event::AddRequested);
    send(&mut store, Event::Char('x'));
    send(&mut store, Event::Escape);
    send(&mut store, Event::AddRequested);

    assert!(store.dialog().is_open());
    assert_eq!(store.dialog().draft(), "");
    assert_eq!(store.items().len(), 3);
}

#[test]
fn random_add_appends_scripted_samples() {
    let mut store = seeded_store(vec![2, 0]);

    send(&mut store, Event::AddRandom);
    send(&mut store, Event::AddRandom);

    assert_eq!(
        names(store.items()),
        ["🍌 banana", "🍏 apple", "🍉 watermelon", "🍉 watermelon", "🍌 banana"]
    );
}

#[test]
fn random_add_respects_active_query() {
    let mut store = seeded_store(vec![1]);

    send(&mut store, Event::QueryChanged("melon".to_string()));
    send(&mut store, Event::AddRandom);

    assert_eq!(store.items().len(), 4);
    assert_eq!(names(store.filtered()), ["🍉 watermelon"]);
}

#[test]
fn random_add_keeps_dialog_and_draft() {
    let mut store = seeded_store(vec![0]);

    send(&mut store, Event::AddRequested);
    send(&mut store, Event::Char('k'));
    send(&mut store, Event::AddRandom);

    assert!(store.dialog().is_open());
    assert_eq!(store.dialog().draft(), "k");
    assert_eq!(store.items().len(), 4);
}

#[test]
fn escape_ladder_ends_in_close_focus() {
    let mut store = seeded_store(vec![0]);
    send(&mut store, Event::QueryChanged("a".to_string()));
    send(&mut store, Event::AddRequested);

    let (_, actions) = send(&mut store, Event::Escape);
    assert!(actions.is_empty());
    assert!(!store.dialog().is_open());

    let (_, actions) = send(&mut store, Event::Escape);
    assert!(actions.is_empty());
    assert_eq!(store.query(), "");

    let (_, actions) = send(&mut store, Event::Escape);
    assert_eq!(actions, [Action::CloseFocus]);
}

#[test]
fn view_model_tracks_counts_and_dialog() {
    let mut store = seeded_store(vec![0]);
    store.title = "Fruit".to_string();

    send(&mut store, Event::QueryChanged("an".to_string()));
    send(&mut store, Event::AddRequested);
    send(&mut store, Event::Char('f'));

    let vm = store.compute_viewmodel(24, 80);
    assert!(vm.header.title.contains("Fruit"));
    assert!(vm.header.title.contains("(1/3)"));
    assert_eq!(vm.display_items.len(), 1);
    assert_eq!(vm.search_bar.query, "an");
    assert_eq!(vm.dialog.map(|d| d.draft), Some("f".to_string()));
}

#[test]
fn production_ids_do_not_collide() {
    let mut ids = UuidIds;
    let seen: HashSet<ItemId> = (0..10_000).map(|_| ids.next_id()).collect();
    assert_eq!(seen.len(), 10_000);
}
