use crate::*;

use alloc::string::ToString;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::sync::Mutex;

fn controller_with(counts: &[usize]) -> CarouselController {
    let mut c = CarouselController::new(CarouselOptions::default());
    for (category, &n) in counts.iter().enumerate() {
        c.register_category(category, 0..n as u64).unwrap();
    }
    c
}

fn active(c: &CarouselController, category: CategoryIndex) -> usize {
    c.active_index(category).unwrap().unwrap()
}

/// Runs one navigation to completion.
fn step(c: &mut CarouselController, category: CategoryIndex, direction: Direction, now_ms: &mut u64) {
    let t = c.navigate(category, direction, *now_ms).unwrap();
    assert!(t.is_some());
    *now_ms += DEFAULT_TRANSITION_MS;
    assert_eq!(c.tick(*now_ms).len(), 1);
}

#[test]
fn new_stack_has_first_item_active() {
    let s = ItemStack::new([10u64, 11, 12]);
    assert_eq!(s.active_index(), Some(0));
    assert_eq!(
        s.states(),
        &[ItemState::Active, ItemState::Stacked, ItemState::Stacked]
    );
    assert!(s.check_invariants());
    assert_eq!(s.key(2), Some(&12));
}

#[test]
fn advance_wraps_and_is_pure() {
    let s = ItemStack::new(0..3u64);
    assert_eq!(s.advance(Direction::Next), Some((0, 1)));
    assert_eq!(s.advance(Direction::Prev), Some((0, 2)));
    assert_eq!(s.active_index(), Some(0));
    assert_eq!(s.states()[0], ItemState::Active);
}

#[test]
fn advance_on_empty_stack_is_none() {
    let s: ItemStack = ItemStack::new(Vec::new());
    assert!(s.is_empty());
    assert_eq!(s.active_index(), None);
    assert_eq!(s.advance(Direction::Next), None);
    assert!(s.check_invariants());
}

#[test]
fn state_labels_match_slide_direction() {
    assert_eq!(ItemState::exiting(Direction::Next).class_name(), "sliding-left");
    assert_eq!(ItemState::entering(Direction::Next).class_name(), "sliding-right");
    assert_eq!(ItemState::exiting(Direction::Prev).class_name(), "sliding-right");
    assert_eq!(ItemState::entering(Direction::Prev).class_name(), "sliding-left");
    assert_eq!(ItemState::Active.class_name(), "active");
    assert_eq!(ItemState::Stacked.class_name(), "stacked");
}

#[test]
fn next_sets_transition_states_synchronously() {
    let mut c = controller_with(&[3]);
    let t = c.next(0, 0).unwrap().unwrap();
    assert_eq!((t.from, t.to, t.due_ms), (0, 1, 500));
    assert_eq!(t.direction, Direction::Next);

    let states = c.item_states(0).unwrap();
    assert_eq!(states[0], ItemState::ExitingLeft);
    assert_eq!(states[1], ItemState::EnteringFromRight);
    assert_eq!(states[2], ItemState::Stacked);
    assert!(c.stack(0).unwrap().check_invariants());
    assert!(c.is_transitioning(0).unwrap());
    assert_eq!(c.next_deadline(), Some(500));
}

#[test]
fn prev_uses_mirrored_states() {
    let mut c = controller_with(&[3]);
    c.prev(0, 0).unwrap().unwrap();
    let states = c.item_states(0).unwrap();
    assert_eq!(states[0], ItemState::ExitingRight);
    assert_eq!(states[2], ItemState::EnteringFromLeft);
    assert_eq!(states[1], ItemState::Stacked);
}

#[test]
fn transition_completes_only_after_duration() {
    let mut c = controller_with(&[3]);
    c.next(0, 100).unwrap();

    assert!(c.tick(599).is_empty());
    assert!(c.is_transitioning(0).unwrap());
    assert_eq!(active(&c, 0), 0);

    let done = c.tick(600);
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].to, 1);
    assert!(!c.is_transitioning(0).unwrap());
    assert_eq!(active(&c, 0), 1);
    assert_eq!(
        c.item_states(0).unwrap(),
        &[ItemState::Stacked, ItemState::Active, ItemState::Stacked]
    );
    assert!(c.tick(10_000).is_empty());
}

#[test]
fn requests_during_transition_are_dropped() {
    let mut c = controller_with(&[4]);
    assert!(c.next(0, 0).unwrap().is_some());
    assert!(c.next(0, 10).unwrap().is_none());
    assert!(c.prev(0, 499).unwrap().is_none());
    assert_eq!(active(&c, 0), 0);

    c.tick(500);
    assert_eq!(active(&c, 0), 1);
    assert!(c.next(0, 500).unwrap().is_some());
}

#[test]
fn categories_transition_independently() {
    let mut c = controller_with(&[3, 5]);
    assert!(c.next(0, 0).unwrap().is_some());
    assert!(c.prev(1, 0).unwrap().is_some());
    assert!(c.is_transitioning(0).unwrap());
    assert!(c.is_transitioning(1).unwrap());

    let done = c.tick(500);
    assert_eq!(done.len(), 2);
    assert_eq!(active(&c, 0), 1);
    assert_eq!(active(&c, 1), 4);
}

#[test]
fn completions_fire_in_deadline_order() {
    let mut c = controller_with(&[3, 3]);
    c.next(1, 0).unwrap();
    c.next(0, 200).unwrap();
    assert_eq!(c.next_deadline(), Some(500));

    let done = c.tick(10_000);
    let order: Vec<CategoryIndex> = done.iter().map(|t| t.category).collect();
    assert_eq!(order, [1, 0]);
}

#[test]
fn next_n_times_returns_to_start() {
    for n in 2..7usize {
        let mut c = controller_with(&[n]);
        let mut now = 0u64;
        for _ in 0..n {
            step(&mut c, 0, Direction::Next, &mut now);
            assert!(c.stack(0).unwrap().check_invariants());
        }
        assert_eq!(active(&c, 0), 0);
    }
}

#[test]
fn prev_inverts_next_from_every_start() {
    let n = 5usize;
    let mut c = controller_with(&[n]);
    let mut now = 0u64;
    for start in 0..n {
        assert_eq!(active(&c, 0), start);
        step(&mut c, 0, Direction::Next, &mut now);
        step(&mut c, 0, Direction::Prev, &mut now);
        assert_eq!(active(&c, 0), start);
        step(&mut c, 0, Direction::Prev, &mut now);
        step(&mut c, 0, Direction::Next, &mut now);
        assert_eq!(active(&c, 0), start);

        step(&mut c, 0, Direction::Next, &mut now);
    }
}

#[test]
fn three_item_scenario_updates_page_indicator() {
    let mut c = controller_with(&[3]);
    assert_eq!(c.page_indicator(0).unwrap().unwrap().current_page_text(), "1");

    c.next(0, 0).unwrap();
    c.tick(500);
    assert_eq!(active(&c, 0), 1);
    let page = c.page_indicator(0).unwrap().unwrap();
    assert_eq!(page.current_page_text(), "2");
    assert_eq!(page.total_pages(), 3);

    c.prev(0, 500).unwrap();
    c.tick(1000);
    c.prev(0, 1000).unwrap();
    c.tick(1500);
    assert_eq!(active(&c, 0), 2);
    assert_eq!(c.page_indicator(0).unwrap().unwrap().current_page_text(), "3");
}

#[test]
fn indicator_is_optional() {
    let mut c = CarouselController::new(CarouselOptions::default());
    c.register_category_with(0, 0..3u64, false).unwrap();
    c.next(0, 0).unwrap();
    c.tick(500);
    assert_eq!(c.page_indicator(0).unwrap(), None);
    assert_eq!(active(&c, 0), 1);
}

#[test]
fn page_change_callback_fires_once_per_completion() {
    let calls = Arc::new(AtomicUsize::new(0));
    let pages = Arc::new(Mutex::new(Vec::new()));
    let options = CarouselOptions::new().with_on_page_change(Some({
        let calls = Arc::clone(&calls);
        let pages = Arc::clone(&pages);
        move |category: CategoryIndex, page: &PageIndicator| {
            calls.fetch_add(1, Ordering::Relaxed);
            pages.lock().unwrap().push((category, page.current_page()));
        }
    }));
    let mut c = CarouselController::new(options);
    c.register_category(7, 0..4u64).unwrap();

    c.next(7, 0).unwrap();
    c.next(7, 100).unwrap();
    c.tick(499);
    assert_eq!(calls.load(Ordering::Relaxed), 0);
    c.tick(500);
    c.tick(900);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert_eq!(*pages.lock().unwrap(), [(7, 2)]);
}

#[test]
fn custom_transition_duration() {
    let mut c = CarouselController::new(CarouselOptions::new().with_transition_duration_ms(120));
    c.register_category(0, 0..2u64).unwrap();
    let t = c.next(0, 1000).unwrap().unwrap();
    assert_eq!(t.due_ms, 1120);
    c.tick(1120);
    assert_eq!(active(&c, 0), 1);
}

#[test]
fn unregistered_category_is_an_error() {
    let mut c = controller_with(&[2]);
    assert_eq!(
        c.next(3, 0),
        Err(CarouselError::InvalidCategory { category: 3 })
    );
    assert!(c.active_index(9).is_err());
    assert!(c.snapshot(9).is_err());
    assert_eq!(
        CarouselError::InvalidCategory { category: 3 }.to_string(),
        "category 3 is not registered"
    );
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut c = controller_with(&[2]);
    assert_eq!(
        c.register_category(0, 0..5u64),
        Err(CarouselError::DuplicateCategory { category: 0 })
    );
    assert_eq!(c.stack(0).unwrap().len(), 2);
}

#[test]
fn empty_and_single_item_categories_never_lock() {
    let mut c = CarouselController::new(CarouselOptions::default());
    c.register_category(0, Vec::<u64>::new()).unwrap();
    c.register_category(1, [42u64]).unwrap();

    assert_eq!(c.next(0, 0).unwrap(), None);
    assert_eq!(c.active_index(0).unwrap(), None);
    assert_eq!(c.prev(1, 0).unwrap(), None);
    assert!(!c.is_transitioning(1).unwrap());
    assert_eq!(c.item_state(1, 0).unwrap(), Some(ItemState::Active));
    assert!(!c.has_pending_transitions());
}

#[test]
fn snapshot_reflects_transition() {
    let mut c = controller_with(&[3]);
    c.next(0, 0).unwrap();
    let snap = c.snapshot(0).unwrap();
    assert!(snap.transitioning);
    assert_eq!(snap.active_index, Some(0));
    assert_eq!(snap.states[1], ItemState::EnteringFromRight);
    assert_eq!(snap.page.unwrap().current_page(), 1);

    c.tick(500);
    let snaps = c.snapshots();
    assert_eq!(snaps.len(), 1);
    assert!(!snaps[0].transitioning);
    assert_eq!(snaps[0].active_index, Some(1));
}

#[test]
fn timers_fire_in_order_and_support_cancel() {
    let mut t = Timers::new();
    let a = t.schedule(300, 'a');
    t.schedule(100, 'b');
    t.schedule(300, 'c');
    assert_eq!(t.next_deadline(), Some(100));
    assert!(t.is_pending(a));

    assert_eq!(t.cancel(a), Some('a'));
    assert_eq!(t.cancel(a), None);
    assert_eq!(t.take_due(99), Vec::<char>::new());
    assert_eq!(t.take_due(100), ['b']);
    assert_eq!(t.take_due(1000), ['c']);
    assert!(t.is_empty());
}
