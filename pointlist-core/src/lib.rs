//! Core task state for `pointlist`: parsing, ordering and inline editing.
//!
//! Everything in this crate is synchronous and total. Operations that
//! reference a task by a stale or out-of-range index are ignored rather
//! than reported as errors.

pub mod edit;
pub mod session;
pub mod store;
pub mod task;

pub use edit::{EditSession, EditTracker};
pub use session::{Session, TaskView};
pub use store::{TaskAction, TaskStore, reduce, sort_by_points};
pub use task::{CRITICAL_THRESHOLD, Severity, Task, coerce_points, is_critical, parse};
