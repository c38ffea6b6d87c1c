//! Property-based tests for parsing and task ordering.
//!
//! Uses proptest to verify:
//! 1. `<name> <n>pts` parses to `(name, n)`; suffix-free input parses to itself.
//! 2. Any sequence of store operations reads back in non-increasing points order.
//! 3. Sorting an already-sorted collection is a no-op.
//! 4. Out-of-range removal leaves the collection unchanged.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashSet;

use pointlist_core::{EditTracker, Task, TaskAction, TaskStore, parse, reduce, sort_by_points};
use proptest::prelude::*;

// --- Strategies ---

/// Task names without digits, so they can never contain a points suffix.
fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z ,.!-]{0,24}"
}

fn arb_task() -> impl Strategy<Value = Task> {
    (arb_name(), -50i64..50).prop_map(|(name, points)| Task::new(name, points))
}

fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(arb_task(), 0..12)
}

fn arb_action() -> impl Strategy<Value = TaskAction> {
    prop_oneof![
        (arb_name(), prop::option::of(0u32..100)).prop_map(|(name, points)| {
            TaskAction::Add(points.map_or(name.clone(), |p| format!("{name} {p}pts")))
        }),
        (0usize..16).prop_map(TaskAction::Remove),
        (0usize..16, -50i64..50)
            .prop_map(|(index, points)| TaskAction::UpdatePoints { index, points }),
        (0usize..16, arb_name()).prop_map(|(index, name)| TaskAction::UpdateName { index, name }),
    ]
}

fn is_descending(tasks: &[Task]) -> bool {
    tasks.windows(2).all(|w| w[0].points >= w[1].points)
}

// --- Property tests ---

proptest! {
    /// Input ending in a points suffix splits into name and points.
    #[test]
    fn suffix_input_parses_name_and_points(name in arb_name(), points in 0u32..1_000_000) {
        let task = parse(&format!("{name} {points}pts"));
        prop_assert_eq!(task.name, name);
        prop_assert_eq!(task.points, i64::from(points));
    }

    /// Input without a suffix becomes a zero-point task named by the whole input.
    #[test]
    fn suffix_free_input_is_all_name(
        raw in "[a-z0-9 ]{0,30}".prop_filter("no pts suffix", |s| !s.contains("pts"))
    ) {
        prop_assert_eq!(parse(&raw), Task::new(raw.clone(), 0));
    }

    /// Parsing is total over arbitrary strings.
    #[test]
    fn parse_never_panics(raw in ".*") {
        let _ = parse(&raw);
    }

    /// Reads stay sorted after any operation sequence.
    #[test]
    fn reads_are_sorted_after_any_actions(
        seed in arb_tasks(),
        actions in prop::collection::vec(arb_action(), 0..24),
    ) {
        let mut store = TaskStore::from_tasks(seed);
        for action in &actions {
            store.apply(action);
            prop_assert!(is_descending(&store.sorted()));
        }
    }

    /// Edit commits keep the collection sorted too.
    #[test]
    fn edit_commits_keep_order(
        seed in arb_tasks(),
        index in 0usize..16,
        points in -50i64..50,
    ) {
        let mut store = TaskStore::from_tasks(seed);
        let mut tracker = EditTracker::new();
        tracker.begin_points_edit(index, 0);
        tracker.change_points_draft(points);
        tracker.commit_points_edit(&mut store);
        prop_assert!(tracker.points().is_none());
        prop_assert!(is_descending(&store.sorted()));
    }

    /// Sorting a sorted collection of distinct point values changes nothing.
    #[test]
    fn sorting_is_idempotent(tasks in arb_tasks()) {
        let mut seen = HashSet::new();
        let distinct: Vec<Task> = tasks.into_iter().filter(|t| seen.insert(t.points)).collect();
        let once = sort_by_points(&distinct);
        let twice = sort_by_points(&once);
        prop_assert_eq!(once, twice);
    }

    /// Removing past the end returns the sorted collection untouched.
    #[test]
    fn out_of_range_remove_is_noop(tasks in arb_tasks(), extra in 0usize..8) {
        let index = tasks.len() + extra;
        let next = reduce(&tasks, &TaskAction::Remove(index));
        prop_assert_eq!(next, sort_by_points(&tasks));
    }

    /// A committed points edit lands on the task that was at the edited index.
    #[test]
    fn committed_points_land_on_edited_task(tasks in arb_tasks(), points in -50i64..50) {
        prop_assume!(!tasks.is_empty());
        let mut store = TaskStore::from_tasks(tasks);
        let target = store.get(0).unwrap();
        let mut tracker = EditTracker::new();
        tracker.begin_points_edit(0, target.points);
        tracker.change_points_draft(points);
        tracker.commit_points_edit(&mut store);
        prop_assert!(store.sorted().contains(&Task::new(target.name, points)));
    }
}
