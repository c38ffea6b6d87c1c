//! Task collection and the reducer that transforms it.
//!
//! The reducer is pure: it borrows the current collection and returns a new
//! one. Index-based actions resolve their index against the collection
//! sorted by descending points at the moment the action runs, since indices
//! shift whenever points change.

use std::cmp::Reverse;

use crate::task::{Task, parse};

/// A change to the task collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Parse the raw input and append the resulting task.
    Add(String),
    /// Remove the task at this sorted index.
    Remove(usize),
    /// Replace the points of the task at this sorted index.
    UpdatePoints {
        /// Sorted index of the task.
        index: usize,
        /// New point value.
        points: i64,
    },
    /// Replace the name of the task at this sorted index.
    UpdateName {
        /// Sorted index of the task.
        index: usize,
        /// New task name.
        name: String,
    },
}

/// Returns a copy of `tasks` ordered by descending points.
///
/// The sort is stable, so tasks with equal points keep their relative order.
#[must_use]
pub fn sort_by_points(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|t| Reverse(t.points));
    sorted
}

/// Applies `action` to `tasks` and returns the resulting collection.
///
/// Out-of-range indices leave the (sorted) collection unchanged.
#[must_use]
pub fn reduce(tasks: &[Task], action: &TaskAction) -> Vec<Task> {
    match action {
        TaskAction::Add(raw) => {
            let mut next = tasks.to_vec();
            next.push(parse(raw));
            next
        }
        TaskAction::Remove(index) => {
            let mut next = sort_by_points(tasks);
            if *index < next.len() {
                next.remove(*index);
            } else {
                tracing::debug!(index, len = next.len(), "remove ignored: index out of range");
            }
            next
        }
        TaskAction::UpdatePoints { index, points } => {
            let mut next = sort_by_points(tasks);
            if let Some(task) = next.get_mut(*index) {
                task.points = *points;
            } else {
                tracing::debug!(index, "points update ignored: index out of range");
            }
            next
        }
        TaskAction::UpdateName { index, name } => {
            let mut next = sort_by_points(tasks);
            if let Some(task) = next.get_mut(*index) {
                task.name.clone_from(name);
            } else {
                tracing::debug!(index, "name update ignored: index out of range");
            }
            next
        }
    }
}

/// Owns the task collection and replaces it with each reducer result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Creates a store pre-seeded with `tasks` in any order.
    #[must_use]
    pub const fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Runs `action` through [`reduce`] and keeps the result.
    pub fn apply(&mut self, action: &TaskAction) {
        tracing::debug!(?action, "applying task action");
        self.tasks = reduce(&self.tasks, action);
    }

    /// Parses `raw` and appends the task.
    pub fn add(&mut self, raw: &str) {
        self.apply(&TaskAction::Add(raw.to_string()));
    }

    /// Removes the task at sorted `index`.
    pub fn remove(&mut self, index: usize) {
        self.apply(&TaskAction::Remove(index));
    }

    /// Sets the points of the task at sorted `index`.
    pub fn update_points(&mut self, index: usize, points: i64) {
        self.apply(&TaskAction::UpdatePoints { index, points });
    }

    /// Sets the name of the task at sorted `index`.
    pub fn update_name(&mut self, index: usize, name: &str) {
        self.apply(&TaskAction::UpdateName {
            index,
            name: name.to_string(),
        });
    }

    /// Returns the tasks ordered by descending points.
    #[must_use]
    pub fn sorted(&self) -> Vec<Task> {
        sort_by_points(&self.tasks)
    }

    /// Returns the task at sorted `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Task> {
        self.sorted().into_iter().nth(index)
    }

    /// Number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
