//! Inline edit sessions for task points and names.
//!
//! Each field kind has its own slot, so a points edit and a name edit can be
//! open at the same time (on different tasks or the same one). Beginning an
//! edit replaces whatever session that slot held. Committing writes the
//! draft into the [`TaskStore`] and empties the slot; the caller decides
//! when to commit.

use crate::store::TaskStore;

/// An in-progress edit of one field of the task at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession<V> {
    /// Sorted index of the task being edited.
    pub index: usize,
    /// Uncommitted value.
    pub draft: V,
}

/// Tracks the points and name edit slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTracker {
    points: Option<EditSession<i64>>,
    name: Option<EditSession<String>>,
}

impl EditTracker {
    /// Creates a tracker with both slots empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: None,
            name: None,
        }
    }

    /// Opens a points edit on `index`, seeded with its current points.
    pub fn begin_points_edit(&mut self, index: usize, current_points: i64) {
        self.points = Some(EditSession {
            index,
            draft: current_points,
        });
    }

    /// Replaces the points draft. Ignored when no points edit is open.
    pub fn change_points_draft(&mut self, points: i64) {
        match self.points.as_mut() {
            Some(session) => session.draft = points,
            None => tracing::debug!("points draft ignored: no active points edit"),
        }
    }

    /// Writes the points draft into `store` and closes the session.
    ///
    /// Returns `false` without touching `store` when no points edit is open.
    pub fn commit_points_edit(&mut self, store: &mut TaskStore) -> bool {
        let Some(session) = self.points.take() else {
            tracing::debug!("points commit ignored: no active points edit");
            return false;
        };
        store.update_points(session.index, session.draft);
        true
    }

    /// Opens a name edit on `index`, seeded with its current name.
    pub fn begin_name_edit(&mut self, index: usize, current_name: impl Into<String>) {
        self.name = Some(EditSession {
            index,
            draft: current_name.into(),
        });
    }

    /// Replaces the name draft. Ignored when no name edit is open.
    pub fn change_name_draft(&mut self, name: impl Into<String>) {
        match self.name.as_mut() {
            Some(session) => session.draft = name.into(),
            None => tracing::debug!("name draft ignored: no active name edit"),
        }
    }

    /// Writes the name draft into `store` and closes the session.
    ///
    /// Returns `false` without touching `store` when no name edit is open.
    pub fn commit_name_edit(&mut self, store: &mut TaskStore) -> bool {
        let Some(session) = self.name.take() else {
            tracing::debug!("name commit ignored: no active name edit");
            return false;
        };
        store.update_name(session.index, &session.draft);
        true
    }

    /// The open points edit, if any.
    #[must_use]
    pub const fn points(&self) -> Option<&EditSession<i64>> {
        self.points.as_ref()
    }

    /// The open name edit, if any.
    #[must_use]
    pub const fn name(&self) -> Option<&EditSession<String>> {
        self.name.as_ref()
    }
}
