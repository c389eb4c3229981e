use crate::domain::model::{DayWindow, SubmissionRow};
use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

/// All day-boundary arithmetic runs in one fixed service offset (UTC+9 for
/// the judge's audience) instead of the host machine's locale, so results do
/// not depend on where the service happens to be deployed.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

pub fn service_offset(offset_hours: i32) -> FixedOffset {
    // Validated at config load time (-12..=14), so this cannot fail.
    FixedOffset::east_opt(offset_hours * 3600).expect("offset hours out of range")
}

/// Calendar-day window containing `now`, as seen from `offset`.
pub fn today_window(now: DateTime<Utc>, offset: FixedOffset) -> DayWindow {
    let local_midnight = now
        .with_timezone(&offset)
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time");
    let start = offset
        .from_local_datetime(&local_midnight)
        .single()
        .expect("fixed offsets have no DST gaps");

    let window = DayWindow {
        start_ms: start.timestamp_millis(),
        end_ms: (start + Duration::days(1)).timestamp_millis(),
    };
    tracing::debug!(
        start_ms = window.start_ms,
        end_ms = window.end_ms,
        "computed today window"
    );
    window
}

/// The day before [`today_window`]: `[start_of_yesterday, start_of_today)`.
pub fn yesterday_window(now: DateTime<Utc>, offset: FixedOffset) -> DayWindow {
    let today = today_window(now, offset);
    DayWindow {
        start_ms: today.start_ms - Duration::days(1).num_milliseconds(),
        end_ms: today.start_ms,
    }
}

/// Walk `rows` (caller guarantees non-increasing timestamp order) and report
/// whether any row lands in `window`. Stops at the first row strictly before
/// `window.start_ms`: with descending timestamps no later row can be in the
/// window either.
pub fn scan_for_window<'a, I>(rows: I, window: DayWindow) -> bool
where
    I: IntoIterator<Item = &'a SubmissionRow>,
{
    for row in rows {
        if window.contains(row.timestamp_ms) {
            tracing::debug!(rank = row.rank, problem_id = %row.problem_id, "row in window");
            return true;
        }
        if row.timestamp_ms < window.start_ms {
            tracing::debug!(rank = row.rank, "row predates window, stopping scan");
            return false;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(problem_id: &str, timestamp_ms: i64, rank: usize) -> SubmissionRow {
        SubmissionRow {
            problem_id: problem_id.to_string(),
            timestamp_ms,
            rank,
        }
    }

    fn kst() -> FixedOffset {
        service_offset(9)
    }

    #[test]
    fn test_today_window_covers_local_day() {
        // 2024-06-10 12:00 KST == 2024-06-10 03:00 UTC
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 3, 0, 0).unwrap();
        let window = today_window(now, kst());

        // 2024-06-10 00:00 KST == 2024-06-09 15:00 UTC
        let start = Utc.with_ymd_and_hms(2024, 6, 9, 15, 0, 0).unwrap();
        assert_eq!(window.start_ms, start.timestamp_millis());
        assert_eq!(window.end_ms - window.start_ms, 86_400_000);
    }

    #[test]
    fn test_yesterday_window_abuts_today() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 3, 0, 0).unwrap();
        let today = today_window(now, kst());
        let yesterday = yesterday_window(now, kst());

        assert_eq!(yesterday.end_ms, today.start_ms);
        assert_eq!(today.start_ms - yesterday.start_ms, 86_400_000);
    }

    #[test]
    fn test_scan_boundary_semantics() {
        let window = DayWindow {
            start_ms: 10_000,
            end_ms: 20_000,
        };
        // Exactly at start: included.
        assert!(scan_for_window(&[row("1000", 10_000, 1)], window));
        // Exactly at end: excluded, and also before-start stop does not fire.
        assert!(!scan_for_window(&[row("1000", 20_000, 1)], window));
    }

    #[test]
    fn test_scan_stops_at_first_row_before_window() {
        // Window is 2024-06-10 KST; rows at 23:59:59, 00:00:00 (in) and
        // 2024-06-09 23:59:59 (out). The scan must return true from the
        // second row and never reach the third.
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 3, 0, 0).unwrap();
        let window = today_window(now, kst());

        let rows = vec![
            row("1001", window.end_ms - 1_000, 1),
            row("1002", window.start_ms, 2),
            row("1003", window.start_ms - 1_000, 3),
        ];
        assert!(scan_for_window(&rows, window));

        // Same rows with the in-window ones removed: the out-of-window row
        // must short-circuit the scan before any later row is inspected.
        let mut inspected = 0usize;
        let out_rows = vec![
            row("1003", window.start_ms - 1_000, 1),
            row("9999", window.start_ms + 1, 2), // would match, must not be reached
        ];
        let hit = scan_for_window(
            out_rows.iter().inspect(|_| inspected += 1),
            window,
        );
        assert!(!hit);
        assert_eq!(inspected, 1);
    }

    #[test]
    fn test_scan_empty_rows_is_false() {
        let window = DayWindow {
            start_ms: 0,
            end_ms: 1,
        };
        let rows: Vec<SubmissionRow> = Vec::new();
        assert!(!scan_for_window(&rows, window));
    }
}
