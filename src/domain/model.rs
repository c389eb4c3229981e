use serde::{Deserialize, Serialize};

/// One accepted submission as rendered on the judge's status page.
///
/// Rows are request-scoped: built from a single page of markup and dropped
/// once the classification result is produced. The status page serves rows
/// most-recent-first; the window scanner relies on that ordering as a
/// property of the source and never re-sorts (sorting would hide upstream
/// anomalies instead of surfacing them).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRow {
    pub problem_id: String,
    /// Submission instant in epoch milliseconds. The page publishes epoch
    /// seconds; the extractor multiplies by 1000.
    pub timestamp_ms: i64,
    /// 1-based position in the page, top row first.
    pub rank: usize,
}

/// Half-open interval `[start_ms, end_ms)` covering one calendar day in the
/// service timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl DayWindow {
    /// Start is inclusive, end is exclusive.
    pub fn contains(&self, timestamp_ms: i64) -> bool {
        timestamp_ms >= self.start_ms && timestamp_ms < self.end_ms
    }
}

/// A tracked study-group member. `id` is the backend profile key, `handle`
/// is the judge-side user id used for scraping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub handle: String,
}

/// Summary returned by the batch runner after walking the whole roster.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub updated: usize,
    pub solved: usize,
    pub failed: usize,
}
