//! Snapshot aggregation over the org-pomodoro queries.
//!
//! [`read_snapshot`] issues one query per field and folds each reply into
//! a typed value. Every field degrades independently: an evaluator
//! failure, a `nil` reply, or a malformed number leaves that one field at
//! its default and never fails the snapshot as a whole. The polling
//! dashboard must always receive a well-formed snapshot, even when the
//! Emacs session is unreachable.

use serde::Serialize;

use crate::evaluator::{Evaluator, NIL_TOKEN, TRUE_TOKEN};

/// Expressions evaluated inside the Emacs session.
pub mod queries {
    /// Seconds left in the running pomodoro.
    pub const REMAINING: &str = "(org-pomodoro-remaining-seconds)";
    /// Configured pomodoro length, in minutes.
    pub const LENGTH: &str = "org-pomodoro-length";
    /// Whether a pomodoro is currently running.
    pub const ACTIVE: &str = "(org-pomodoro-active-p)";
    /// Heading of the clocked-in task.
    pub const HEADING: &str = "org-clock-heading";
    /// Pomodoros completed today.
    pub const POINTS: &str = "(kd/pmd-today-point-display)";
    /// Human-readable timer string; debug view only.
    pub const POMO_TIME: &str = "(kd/org-pomodoro-time)";
}

/// One aggregated read of timer state.
///
/// Built fresh per request and discarded after serialization. No
/// consistency between `remaining_time` and `total_time` is enforced
/// here; the Emacs session is authoritative and may report
/// `remaining_time > total_time`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Heading of the tracked task, or empty when none is clocked in.
    pub task_title: String,
    /// Seconds left in the current interval; 0 when inactive.
    pub remaining_time: i64,
    /// Configured interval length in seconds (minutes * 60).
    pub total_time: i64,
    /// Whether an interval is currently running.
    pub is_active: bool,
    /// Pomodoros completed today.
    pub today_points: i64,
}

/// Unparsed replies per query; an evaluation failure surfaces as `""`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReplies {
    pub remaining: String,
    pub length: String,
    pub active: String,
    pub heading: String,
    pub points: String,
    pub pomo_time: String,
}

/// Raw evaluator replies alongside the snapshot parsed from them, for
/// operator troubleshooting.
#[derive(Debug, Clone, Serialize)]
pub struct DebugReport {
    pub raw: RawReplies,
    pub parsed: Snapshot,
}

/// Reads the five field queries and assembles a snapshot.
pub fn read_snapshot(eval: &dyn Evaluator) -> Snapshot {
    let mut snap = Snapshot::default();

    if let Some(reply) = query_value(eval, queries::REMAINING) {
        snap.remaining_time = parse_count(&reply);
    }
    if let Some(reply) = query_value(eval, queries::LENGTH) {
        snap.total_time = parse_count(&reply) * 60;
    }
    match eval.evaluate(queries::ACTIVE) {
        Ok(reply) => snap.is_active = reply == TRUE_TOKEN,
        Err(err) => tracing::debug!(query = queries::ACTIVE, %err, "query failed"),
    }
    if let Some(reply) = query_value(eval, queries::HEADING) {
        snap.task_title = reply;
    }
    if let Some(reply) = query_value(eval, queries::POINTS) {
        snap.today_points = parse_count(&reply);
    }

    snap
}

/// Reads the debug view: every query's raw reply plus the snapshot
/// parsed from those same replies (the queries are not re-issued).
pub fn read_debug(eval: &dyn Evaluator) -> DebugReport {
    let raw = RawReplies {
        remaining: raw_value(eval, queries::REMAINING),
        length: raw_value(eval, queries::LENGTH),
        active: raw_value(eval, queries::ACTIVE),
        heading: raw_value(eval, queries::HEADING),
        points: raw_value(eval, queries::POINTS),
        pomo_time: raw_value(eval, queries::POMO_TIME),
    };
    let parsed = parse_raw(&raw);
    DebugReport { raw, parsed }
}

/// Evaluates one query, folding failure and the `nil` token into `None`.
fn query_value(eval: &dyn Evaluator, expr: &str) -> Option<String> {
    match eval.evaluate(expr) {
        Ok(reply) if reply != NIL_TOKEN => Some(reply),
        Ok(_) => None,
        Err(err) => {
            tracing::debug!(query = expr, %err, "query failed");
            None
        }
    }
}

/// Evaluates one query for the debug view; failure becomes `""`.
fn raw_value(eval: &dyn Evaluator, expr: &str) -> String {
    match eval.evaluate(expr) {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(query = expr, %err, "query failed");
            String::new()
        }
    }
}

/// Parses a numeric reply, truncating toward zero. Malformed replies
/// fall back to zero; one bad field must not blank out the rest.
fn parse_count(reply: &str) -> i64 {
    match reply.parse::<f64>() {
        Ok(value) => value.trunc() as i64,
        Err(_) => {
            tracing::debug!(reply, "non-numeric reply, using 0");
            0
        }
    }
}

fn parse_raw(raw: &RawReplies) -> Snapshot {
    let mut snap = Snapshot::default();
    if raw.remaining != NIL_TOKEN {
        snap.remaining_time = parse_count(&raw.remaining);
    }
    if raw.length != NIL_TOKEN {
        snap.total_time = parse_count(&raw.length) * 60;
    }
    snap.is_active = raw.active == TRUE_TOKEN;
    if raw.heading != NIL_TOKEN {
        snap.task_title = raw.heading.clone();
    }
    if raw.points != NIL_TOKEN {
        snap.today_points = parse_count(&raw.points);
    }
    snap
}
