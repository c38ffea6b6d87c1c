//! Event-level entry points for a presentation shell.
//!
//! A [`Session`] owns the task store, the edit tracker and the "next task"
//! input text. The shell constructs one per run, forwards each user event to
//! the matching method and renders [`Session::tasks`] afterwards.

use crate::edit::{EditSession, EditTracker};
use crate::store::TaskStore;
use crate::task::{Severity, Task, coerce_points};

/// A task as it should be displayed, in sorted position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// Position in the descending-points order; pass this back to events.
    pub index: usize,
    /// Task name.
    pub name: String,
    /// Task points.
    pub points: i64,
    /// Normal or critical, derived from `points`.
    pub severity: Severity,
}

/// All mutable state of one task-list session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: TaskStore,
    edits: EditTracker,
    next_task: String,
}

impl Session {
    /// Creates a session from optional initial input text and tasks.
    #[must_use]
    pub fn new(next_task: Option<String>, tasks: Vec<Task>) -> Self {
        Self {
            store: TaskStore::from_tasks(tasks),
            edits: EditTracker::new(),
            next_task: next_task.unwrap_or_default(),
        }
    }

    /// Adds a task parsed from `raw`. Empty input is not rejected here.
    pub fn submit_add(&mut self, raw: &str) {
        self.store.add(raw);
    }

    /// Adds a task parsed from the current "next task" text.
    pub fn submit_next_task(&mut self) {
        let raw = self.next_task.clone();
        self.submit_add(&raw);
    }

    /// Replaces the "next task" text.
    pub fn set_next_task(&mut self, text: impl Into<String>) {
        self.next_task = text.into();
    }

    /// Removes the task at sorted `index`.
    pub fn click_remove(&mut self, index: usize) {
        self.store.remove(index);
    }

    /// Starts editing the points of the task at sorted `index`.
    pub fn click_points(&mut self, index: usize) {
        match self.store.get(index) {
            Some(task) => self.edits.begin_points_edit(index, task.points),
            None => tracing::debug!(index, "points click ignored: index out of range"),
        }
    }

    /// Updates the points draft from raw input; non-numeric text becomes 0.
    pub fn change_points_draft(&mut self, value: &str) {
        self.edits.change_points_draft(coerce_points(value));
    }

    /// Commits the points edit, if one is open.
    pub fn blur_points(&mut self) {
        self.edits.commit_points_edit(&mut self.store);
    }

    /// Starts editing the name of the task at sorted `index`.
    pub fn click_name(&mut self, index: usize) {
        match self.store.get(index) {
            Some(task) => self.edits.begin_name_edit(index, task.name),
            None => tracing::debug!(index, "name click ignored: index out of range"),
        }
    }

    /// Updates the name draft.
    pub fn change_name_draft(&mut self, value: &str) {
        self.edits.change_name_draft(value);
    }

    /// Commits the name edit, if one is open.
    pub fn blur_name(&mut self) {
        self.edits.commit_name_edit(&mut self.store);
    }

    /// The tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> Vec<TaskView> {
        self.store
            .sorted()
            .into_iter()
            .enumerate()
            .map(|(index, task)| TaskView {
                index,
                severity: task.severity(),
                name: task.name,
                points: task.points,
            })
            .collect()
    }

    /// The open points edit, if any.
    #[must_use]
    pub const fn points_edit(&self) -> Option<&EditSession<i64>> {
        self.edits.points()
    }

    /// The open name edit, if any.
    #[must_use]
    pub const fn name_edit(&self) -> Option<&EditSession<String>> {
        self.edits.name()
    }

    /// The current "next task" text.
    #[must_use]
    pub fn next_task(&self) -> &str {
        &self.next_task
    }

    /// Number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the session holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
