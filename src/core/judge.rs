use crate::core::{dedup, extract, window};
use crate::domain::ports::StatusSource;
use crate::utils::error::Result;
use chrono::{DateTime, FixedOffset, Utc};

pub const DEFAULT_RECENT_COUNT: usize = 20;
pub const DEFAULT_TODAY_COUNT: usize = 10;

/// Ties the pipeline together: fetch one status page, extract rows, classify.
/// Stateless across calls; every request re-derives its window from the
/// instant it runs at, so re-running against a frozen page snapshot always
/// gives the same answer.
#[derive(Debug, Clone)]
pub struct JudgeService<S> {
    source: S,
    offset: FixedOffset,
    row_cap: usize,
}

impl<S: StatusSource> JudgeService<S> {
    pub fn new(source: S, offset: FixedOffset, row_cap: usize) -> Self {
        Self {
            source,
            offset,
            row_cap,
        }
    }

    /// The user's `count` most recent distinct accepted problems, regardless
    /// of date.
    pub async fn recent_problems(&self, user: &str, count: usize) -> Result<Vec<String>> {
        let markup = self.source.fetch_status(user).await?;
        let rows = extract::extract_rows(&markup, self.row_cap);
        Ok(dedup::collect_distinct(&rows, count))
    }

    /// Did the user solve anything during yesterday's calendar day in the
    /// service timezone?
    pub async fn solved_yesterday(&self, user: &str) -> Result<bool> {
        self.solved_yesterday_at(user, Utc::now()).await
    }

    pub async fn solved_yesterday_at(&self, user: &str, now: DateTime<Utc>) -> Result<bool> {
        let markup = self.source.fetch_status(user).await?;
        let rows = extract::extract_rows(&markup, self.row_cap);
        let yesterday = window::yesterday_window(now, self.offset);
        Ok(window::scan_for_window(&rows, yesterday))
    }

    /// Distinct problems solved within today's window, most recent first.
    pub async fn today_problems(&self, user: &str, count: usize) -> Result<Vec<String>> {
        self.today_problems_at(user, count, Utc::now()).await
    }

    pub async fn today_problems_at(
        &self,
        user: &str,
        count: usize,
        now: DateTime<Utc>,
    ) -> Result<Vec<String>> {
        let markup = self.source.fetch_status(user).await?;
        let rows = extract::extract_rows(&markup, self.row_cap);
        let today = window::today_window(now, self.offset);
        Ok(dedup::collect_distinct_within(&rows, today, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract::tests::status_page;
    use crate::core::fetch::JudgeFetcher;
    use crate::core::window::service_offset;
    use chrono::TimeZone;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn service(base_url: String) -> JudgeService<JudgeFetcher> {
        let fetcher = JudgeFetcher::new(base_url, Duration::from_secs(5)).unwrap();
        JudgeService::new(fetcher, service_offset(9), extract::DEFAULT_ROW_CAP)
    }

    #[tokio::test]
    async fn test_recent_problems_collapse_duplicates() {
        let t = 1_718_000_000i64;
        let page = status_page(&[
            ("1000", Some(t)),
            ("2000", Some(t - 3_600)),
            ("2000", Some(t - 3_600)),
            ("3000", Some(t - 90_000)),
        ]);

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/status").query_param("user_id", "alice");
            then.status(200).body(&page);
        });

        let items = service(server.base_url())
            .recent_problems("alice", 10)
            .await
            .unwrap();
        assert_eq!(items, vec!["1000", "2000", "3000"]);
    }

    #[tokio::test]
    async fn test_solved_yesterday_against_fixed_instant() {
        // now = 2024-06-11 12:00 KST; yesterday window is 2024-06-10 KST.
        let now = Utc.with_ymd_and_hms(2024, 6, 11, 3, 0, 0).unwrap();
        let yesterday = window::yesterday_window(now, service_offset(9));
        let in_window = yesterday.start_ms / 1000 + 3_600;
        let page = status_page(&[("1000", Some(in_window))]);

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/status");
            then.status(200).body(&page);
        });

        let solved = service(server.base_url())
            .solved_yesterday_at("alice", now)
            .await
            .unwrap();
        assert!(solved);
    }

    #[tokio::test]
    async fn test_empty_page_means_not_solved_and_no_items() {
        let page = status_page(&[]);

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/status");
            then.status(200).body(&page);
        });

        let svc = service(server.base_url());
        let now = Utc.with_ymd_and_hms(2024, 6, 11, 3, 0, 0).unwrap();

        assert!(!svc.solved_yesterday_at("alice", now).await.unwrap());
        assert!(svc
            .today_problems_at("alice", 10, now)
            .await
            .unwrap()
            .is_empty());
        assert!(svc.recent_problems("alice", 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_today_problems_bounded_by_window_and_count() {
        let now = Utc.with_ymd_and_hms(2024, 6, 11, 3, 0, 0).unwrap();
        let today = window::today_window(now, service_offset(9));
        let base = today.start_ms / 1000;
        let page = status_page(&[
            ("1003", Some(base + 7_200)),
            ("1002", Some(base + 3_600)),
            ("1001", Some(base)),
            ("9999", Some(base - 60)), // yesterday, ends the walk
        ]);

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/status");
            then.status(200).body(&page);
        });

        let svc = service(server.base_url());
        let items = svc.today_problems_at("alice", 10, now).await.unwrap();
        assert_eq!(items, vec!["1003", "1002", "1001"]);

        let capped = svc.today_problems_at("alice", 2, now).await.unwrap();
        assert_eq!(capped, vec!["1003", "1002"]);
    }
}
