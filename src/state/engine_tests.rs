//! Tests for the search engine state machine.

use super::*;
use crate::model::{DisplayName, Lifespan};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const DELAY_MS: i64 = 300;
const DELAY: Duration = Duration::from_millis(300);

// ===== Helpers =====

/// Notifications observed by the listener, as slugs (None = cleared).
type Notifications = Rc<RefCell<Vec<Option<String>>>>;

fn person(slug: &str, name: &str) -> Record {
    Record::new(
        Slug::new(slug).unwrap(),
        DisplayName::new(name).unwrap(),
        None,
    )
}

fn alice_and_bob() -> Vec<Record> {
    vec![person("alice", "Alice"), person("bob", "Bob")]
}

fn engine_with(candidates: Vec<Record>) -> (SearchEngine, Notifications) {
    let seen: Notifications = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let engine = SearchEngine::new(candidates, DebounceDelay::from_millis(DELAY_MS).unwrap())
        .with_listener(move |record| {
            sink.borrow_mut()
                .push(record.map(|r| r.slug().as_str().to_string()));
        });
    (engine, seen)
}

fn names(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.name().to_string()).collect()
}

fn slug(s: &str) -> Slug {
    Slug::new(s).unwrap()
}

// ===== Initial state =====

#[test]
fn new_engine_starts_blank_and_unfocused() {
    let (engine, seen) = engine_with(alice_and_bob());

    assert_eq!(engine.query(), "");
    assert_eq!(engine.debounced_query(), "");
    assert!(engine.selection().is_none());
    assert!(!engine.is_focused());
    assert!(engine.visible_set().is_empty());
    assert!(!engine.panel_visible());
    assert!(!engine.no_matches_indicator_visible());
    assert_eq!(engine.selection_label(), NO_SELECTION_LABEL);
    assert!(seen.borrow().is_empty());
}

// ===== on_input_changed =====

#[test]
fn input_updates_query_immediately_but_not_debounced_query() {
    let t0 = Instant::now();
    let (mut engine, _) = engine_with(alice_and_bob());

    engine.on_input_changed("b", t0);

    assert_eq!(engine.query(), "b");
    assert_eq!(engine.debounced_query(), "");
    assert_eq!(engine.next_deadline(), Some(t0 + DELAY));
}

#[test]
fn debounced_query_lands_after_delay() {
    let t0 = Instant::now();
    let (mut engine, _) = engine_with(alice_and_bob());

    engine.on_input_changed("b", t0);
    assert!(!engine.tick(t0 + DELAY - Duration::from_millis(1)));
    assert_eq!(engine.debounced_query(), "");

    assert!(engine.tick(t0 + DELAY));
    assert_eq!(engine.debounced_query(), "b");
    assert_eq!(engine.next_deadline(), None);
}

#[test]
fn rapid_input_collapses_into_single_update_with_last_value() {
    let t0 = Instant::now();
    let (mut engine, _) = engine_with(alice_and_bob());

    engine.on_input_changed("a", t0);
    engine.on_input_changed("ab", t0 + Duration::from_millis(100));
    engine.on_input_changed("abc", t0 + Duration::from_millis(200));

    // Walk the clock in small steps, recording every debounced value seen
    let mut updates = Vec::new();
    let mut now = t0;
    while now <= t0 + Duration::from_secs(1) {
        if engine.tick(now) {
            updates.push(engine.debounced_query().to_string());
        }
        now += Duration::from_millis(10);
    }

    assert_eq!(updates, vec!["abc".to_string()]);
}

#[test]
fn repeated_identical_input_is_idempotent_after_settling() {
    let t0 = Instant::now();
    let (mut once, _) = engine_with(alice_and_bob());
    let (mut twice, _) = engine_with(alice_and_bob());
    once.on_focus_gained();
    twice.on_focus_gained();

    once.on_input_changed("li", t0);
    once.tick(t0 + DELAY);

    twice.on_input_changed("li", t0);
    twice.tick(t0 + DELAY);
    twice.on_input_changed("li", t0 + DELAY);
    twice.tick(t0 + DELAY * 2);

    assert_eq!(once.debounced_query(), twice.debounced_query());
    assert_eq!(names(&once.visible_set()), names(&twice.visible_set()));
}

#[test]
fn editing_after_pick_clears_selection_and_notifies_none() {
    let t0 = Instant::now();
    let (mut engine, seen) = engine_with(alice_and_bob());
    engine.on_focus_gained();
    engine.on_item_picked(&slug("bob"), t0).unwrap();

    engine.on_input_changed("Bobx", t0 + DELAY);

    assert!(engine.selection().is_none());
    assert_eq!(
        *seen.borrow(),
        vec![Some("bob".to_string()), None],
        "pick then invalidation"
    );
}

#[test]
fn editing_back_to_selected_name_still_clears_selection() {
    let t0 = Instant::now();
    let (mut engine, _) = engine_with(alice_and_bob());
    engine.on_item_picked(&slug("bob"), t0).unwrap();

    engine.on_input_changed("Bob", t0);

    assert!(engine.selection().is_none());
}

#[test]
fn clearing_input_with_selection_resets_and_notifies() {
    let t0 = Instant::now();
    let (mut engine, seen) = engine_with(alice_and_bob());
    engine.on_item_picked(&slug("alice"), t0).unwrap();

    engine.on_input_changed("", t0);

    assert!(engine.selection().is_none());
    assert_eq!(seen.borrow().last(), Some(&None));
}

#[test]
fn query_becoming_blank_notifies_even_without_selection() {
    let t0 = Instant::now();
    let (mut engine, seen) = engine_with(alice_and_bob());

    engine.on_input_changed("a", t0);
    assert!(seen.borrow().is_empty());

    engine.on_input_changed("  ", t0);
    assert_eq!(*seen.borrow(), vec![None]);
}

#[test]
fn typing_without_selection_does_not_notify() {
    let t0 = Instant::now();
    let (mut engine, seen) = engine_with(alice_and_bob());

    engine.on_input_changed("a", t0);
    engine.on_input_changed("al", t0);
    engine.on_input_changed("ali", t0);

    assert!(seen.borrow().is_empty());
}

#[test]
fn blank_input_on_blank_query_does_not_notify() {
    let t0 = Instant::now();
    let (mut engine, seen) = engine_with(alice_and_bob());

    engine.on_input_changed("", t0);

    assert!(seen.borrow().is_empty());
}

// ===== Focus =====

#[test]
fn focus_on_blank_query_resets_debounced_query_immediately() {
    let t0 = Instant::now();
    let (mut engine, _) = engine_with(alice_and_bob());
    engine.on_focus_gained();
    engine.on_input_changed("b", t0);
    engine.tick(t0 + DELAY);
    engine.on_input_changed("", t0 + DELAY);
    engine.on_focus_lost();
    assert_eq!(engine.debounced_query(), "b");

    engine.on_focus_gained();

    assert_eq!(engine.debounced_query(), "");
    assert_eq!(engine.next_deadline(), None, "pending timer cancelled");
    assert_eq!(names(&engine.visible_set()), vec!["Alice", "Bob"]);
}

#[test]
fn focus_on_non_blank_query_keeps_debounce_pending() {
    let t0 = Instant::now();
    let (mut engine, _) = engine_with(alice_and_bob());
    engine.on_input_changed("b", t0);

    engine.on_focus_gained();

    assert_eq!(engine.debounced_query(), "");
    assert_eq!(engine.next_deadline(), Some(t0 + DELAY));
}

#[test]
fn focus_lost_preserves_query_and_selection() {
    let t0 = Instant::now();
    let (mut engine, _) = engine_with(alice_and_bob());
    engine.on_focus_gained();
    engine.on_item_picked(&slug("bob"), t0).unwrap();

    engine.on_focus_lost();

    assert!(!engine.is_focused());
    assert_eq!(engine.query(), "Bob");
    assert_eq!(engine.selection().map(|r| r.slug().as_str()), Some("bob"));
}

#[test]
fn blank_debounced_query_shows_nothing_when_unfocused() {
    let (mut engine, _) = engine_with(alice_and_bob());
    engine.on_focus_gained();
    assert_eq!(engine.visible_set().len(), 2);

    engine.on_focus_lost();

    assert!(engine.visible_set().is_empty());
    assert!(!engine.panel_visible());
}

#[test]
fn non_blank_debounced_query_filters_regardless_of_focus() {
    let t0 = Instant::now();
    let (mut engine, _) = engine_with(alice_and_bob());
    engine.on_input_changed("ob", t0);
    engine.tick(t0 + DELAY);

    assert_eq!(names(&engine.visible_set()), vec!["Bob"]);
    assert!(!engine.panel_visible(), "panel needs focus");
}

// ===== on_item_picked =====

#[test]
fn pick_sets_selection_and_snaps_query_to_name() {
    let t0 = Instant::now();
    let (mut engine, seen) = engine_with(alice_and_bob());
    engine.on_input_changed("b", t0);

    engine.on_item_picked(&slug("bob"), t0).unwrap();

    assert_eq!(engine.query(), "Bob");
    assert_eq!(engine.selection().map(|r| r.name().as_str()), Some("Bob"));
    assert_eq!(*seen.borrow(), vec![Some("bob".to_string())]);
}

#[test]
fn pick_rearms_debounce_with_picked_name() {
    let t0 = Instant::now();
    let (mut engine, _) = engine_with(alice_and_bob());
    engine.on_input_changed("b", t0);

    engine
        .on_item_picked(&slug("bob"), t0 + Duration::from_millis(50))
        .unwrap();
    engine.tick(t0 + Duration::from_millis(50) + DELAY);

    assert_eq!(engine.debounced_query(), "Bob");
}

#[test]
fn pick_of_unknown_slug_is_rejected_without_side_effects() {
    let t0 = Instant::now();
    let (mut engine, seen) = engine_with(alice_and_bob());
    engine.on_input_changed("b", t0);

    let result = engine.on_item_picked(&slug("carol"), t0);

    assert_eq!(
        result,
        Err(EngineError::UnknownRecord {
            slug: slug("carol")
        })
    );
    assert_eq!(engine.query(), "b");
    assert!(engine.selection().is_none());
    assert!(seen.borrow().is_empty());
}

#[test]
fn picking_again_notifies_again() {
    let t0 = Instant::now();
    let (mut engine, seen) = engine_with(alice_and_bob());

    engine.on_item_picked(&slug("bob"), t0).unwrap();
    engine.on_item_picked(&slug("alice"), t0).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![Some("bob".to_string()), Some("alice".to_string())]
    );
}

#[test]
fn selection_label_includes_lifespan() {
    let t0 = Instant::now();
    let carolus = Record::new(
        slug("carolus-haverbeke-1832"),
        DisplayName::new("Carolus Haverbeke").unwrap(),
        Some(Lifespan {
            born: 1832,
            died: 1905,
        }),
    );
    let (mut engine, _) = engine_with(vec![carolus]);

    engine
        .on_item_picked(&slug("carolus-haverbeke-1832"), t0)
        .unwrap();

    assert_eq!(engine.selection_label(), "Carolus Haverbeke (1832 - 1905)");
}

// ===== Scenarios =====

#[test]
fn scenario_focus_type_pick() {
    let t0 = Instant::now();
    let (mut engine, seen) = engine_with(alice_and_bob());

    // Focus on empty field shows everything
    engine.on_focus_gained();
    assert!(engine.panel_visible());
    assert_eq!(names(&engine.visible_set()), vec!["Alice", "Bob"]);

    // Type "b" and let the debounce settle
    engine.on_input_changed("b", t0);
    engine.tick(t0 + DELAY);
    assert_eq!(names(&engine.visible_set()), vec!["Bob"]);
    assert!(engine.panel_visible());

    // Pick Bob
    engine
        .on_item_picked(&slug("bob"), t0 + DELAY + Duration::from_millis(10))
        .unwrap();
    assert_eq!(engine.selection().map(|r| r.name().as_str()), Some("Bob"));
    assert_eq!(engine.query(), "Bob");
    assert!(!engine.panel_visible());
    assert_eq!(*seen.borrow(), vec![Some("bob".to_string())]);
}

#[test]
fn scenario_no_matches() {
    let t0 = Instant::now();
    let (mut engine, _) = engine_with(alice_and_bob());
    engine.on_focus_gained();

    engine.on_input_changed("zz", t0);
    engine.tick(t0 + DELAY);

    assert!(engine.visible_set().is_empty());
    assert!(engine.no_matches_indicator_visible());
    assert!(!engine.panel_visible());
}

#[test]
fn no_matches_indicator_waits_for_debounce() {
    let t0 = Instant::now();
    let (mut engine, _) = engine_with(alice_and_bob());
    engine.on_focus_gained();

    engine.on_input_changed("zz", t0);

    assert!(!engine.no_matches_indicator_visible());
    assert!(engine.panel_visible(), "still showing the blank-query list");
}

#[test]
fn snapshot_agrees_with_derived_accessors() {
    let t0 = Instant::now();
    let (mut engine, _) = engine_with(alice_and_bob());
    engine.on_focus_gained();
    engine.on_input_changed("ali", t0);
    engine.tick(t0 + DELAY);

    let snapshot = engine.snapshot();

    assert_eq!(snapshot.query, "ali");
    assert_eq!(snapshot.panel_visible, engine.panel_visible());
    assert_eq!(names(&snapshot.visible_set), vec!["Alice"]);
    assert_eq!(
        snapshot.no_matches_indicator_visible,
        engine.no_matches_indicator_visible()
    );
    assert_eq!(snapshot.selection_label, NO_SELECTION_LABEL);
}

fn assert_snapshot_matches_accessors(engine: &SearchEngine, state: &str) {
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.panel_visible, engine.panel_visible(), "{state}");
    assert_eq!(
        snapshot.no_matches_indicator_visible,
        engine.no_matches_indicator_visible(),
        "{state}"
    );
    assert_eq!(snapshot.visible_set, engine.visible_set(), "{state}");
}

#[test]
fn snapshot_agrees_with_accessors_in_every_state() {
    let t0 = Instant::now();
    let (mut engine, _) = engine_with(alice_and_bob());
    assert_snapshot_matches_accessors(&engine, "initial");

    engine.on_focus_gained();
    assert_snapshot_matches_accessors(&engine, "focused, blank");

    engine.on_input_changed("zz", t0);
    engine.tick(t0 + DELAY);
    assert_snapshot_matches_accessors(&engine, "no matches");

    engine.on_item_picked(&slug("bob"), t0 + DELAY).unwrap();
    assert_snapshot_matches_accessors(&engine, "picked");
    assert!(!engine.snapshot().panel_visible);

    engine.on_focus_lost();
    engine.tick(t0 + DELAY * 2);
    assert_snapshot_matches_accessors(&engine, "blurred after pick");
}

// ===== Teardown =====

#[test]
fn teardown_with_pending_timer_does_not_notify() {
    let t0 = Instant::now();
    let (mut engine, seen) = engine_with(alice_and_bob());
    engine.on_input_changed("a", t0);

    engine.teardown();

    assert!(seen.borrow().is_empty());
}

#[test]
fn zero_delay_settles_on_same_instant() {
    let t0 = Instant::now();
    let mut engine = SearchEngine::new(alice_and_bob(), DebounceDelay::from_millis(0).unwrap());
    engine.on_focus_gained();

    engine.on_input_changed("a", t0);
    assert!(engine.tick(t0));

    assert_eq!(names(&engine.visible_set()), vec!["Alice"]);
}
