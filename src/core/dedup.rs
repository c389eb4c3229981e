use crate::domain::model::{DayWindow, SubmissionRow};
use std::collections::HashSet;

/// First `limit` distinct problem ids from `rows`, in first-seen order.
pub fn collect_distinct<'a, I>(rows: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a SubmissionRow>,
{
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for row in rows {
        if items.len() >= limit {
            break;
        }
        if seen.insert(row.problem_id.clone()) {
            items.push(row.problem_id.clone());
        }
    }
    items
}

/// Like [`collect_distinct`] but restricted to rows inside `window`. Rows are
/// expected in non-increasing timestamp order, so the first row strictly
/// before `window.start_ms` ends the walk.
pub fn collect_distinct_within<'a, I>(rows: I, window: DayWindow, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a SubmissionRow>,
{
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for row in rows {
        if row.timestamp_ms < window.start_ms {
            break;
        }
        if !window.contains(row.timestamp_ms) {
            continue;
        }
        if seen.insert(row.problem_id.clone()) {
            items.push(row.problem_id.clone());
            if items.len() >= limit {
                break;
            }
        }
    }
    items
}
