//! Task model and the free-text parsing rule.
//!
//! A task is a name plus an integer point value. Users type both into a
//! single line, e.g. `eat the frog 20pts`; [`parse`] splits them apart.

use std::num::IntErrorKind;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tasks at or above this many points are flagged as critical.
pub const CRITICAL_THRESHOLD: i64 = 10;

/// Matches `<name> <digits>pts`, taking the shortest possible name.
#[allow(clippy::expect_used)]
static POINTS_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*?) ([0-9]+)pts").expect("points suffix pattern compiles"));

/// A named unit of work with a point value.
///
/// Tasks carry no identifier. They are addressed by their position in the
/// list sorted by descending points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Free-text task name.
    pub name: String,
    /// Point value (0 when none was given).
    #[serde(default)]
    pub points: i64,
}

impl Task {
    /// Creates a task with an explicit name and point value.
    #[must_use]
    pub fn new(name: impl Into<String>, points: i64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Returns the display severity for this task's current points.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        Severity::of(self.points)
    }
}

/// Display severity of a task, derived from its points on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Below [`CRITICAL_THRESHOLD`].
    Normal,
    /// At or above [`CRITICAL_THRESHOLD`].
    Critical,
}

impl Severity {
    /// Classifies a point value.
    #[must_use]
    pub const fn of(points: i64) -> Self {
        if is_critical(points) {
            Self::Critical
        } else {
            Self::Normal
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Returns `true` when `points` meets the critical threshold.
#[must_use]
pub const fn is_critical(points: i64) -> bool {
    points >= CRITICAL_THRESHOLD
}

/// Parses raw input into a [`Task`].
///
/// The first occurrence of ` <digits>pts` splits the input: everything
/// before it becomes the name, the digits become the points, and anything
/// after the suffix is dropped. Input without that suffix becomes a
/// zero-point task named by the whole string. The name is not trimmed.
///
/// Digit runs too large for `i64` saturate to `i64::MAX`.
#[must_use]
pub fn parse(raw: &str) -> Task {
    let Some(caps) = POINTS_SUFFIX.captures(raw) else {
        return Task::new(raw, 0);
    };
    let name = caps.get(1).map_or("", |m| m.as_str());
    let points = caps
        .get(2)
        .map_or(0, |m| m.as_str().parse::<i64>().unwrap_or(i64::MAX));
    Task::new(name, points)
}

/// Coerces a points draft typed by the user into a number.
///
/// Surrounding whitespace is ignored and a leading sign is accepted.
/// Numbers out of `i64` range saturate, as in [`parse`]. Empty or
/// non-numeric input becomes 0.
#[must_use]
pub fn coerce_points(draft: &str) -> i64 {
    match draft.trim().parse::<i64>() {
        Ok(points) => points,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}
