use crate::domain::ports::StatusSource;
use crate::utils::error::{Result, TrackerError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// The judge rejects obviously non-browser clients, so the status request
/// carries a desktop Chrome identity.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

pub const DEFAULT_JUDGE_BASE_URL: &str = "https://www.acmicpc.net";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Outbound HTTP client for the judge's status listing. One GET per call,
/// verdict filter fixed to accepted (`result_id=4`), any language.
#[derive(Debug, Clone)]
pub struct JudgeFetcher {
    client: Client,
    base_url: String,
}

impl JudgeFetcher {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn status_url(&self, user: &str) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        let url = Url::parse_with_params(
            &format!("{}/status", base),
            &[
                ("problem_id", ""),
                ("user_id", user),
                ("language_id", "-1"),
                ("result_id", "4"),
            ],
        )?;
        Ok(url)
    }
}

#[async_trait]
impl StatusSource for JudgeFetcher {
    async fn fetch_status(&self, user: &str) -> Result<String> {
        let url = self.status_url(user)?;
        tracing::debug!(%url, "fetching judge status page");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "judge responded");

        if !status.is_success() {
            return Err(TrackerError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_sends_filters_and_browser_identity() {
        let server = MockServer::start();
        let status_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/status")
                .query_param("user_id", "studygroup")
                .query_param("result_id", "4")
                .query_param("language_id", "-1")
                .header("user-agent", BROWSER_USER_AGENT);
            then.status(200).body("<html>ok</html>");
        });

        let fetcher =
            JudgeFetcher::new(server.base_url(), Duration::from_secs(5)).unwrap();
        let body = fetcher.fetch_status("studygroup").await.unwrap();

        status_mock.assert();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/status");
            then.status(500);
        });

        let fetcher =
            JudgeFetcher::new(server.base_url(), Duration::from_secs(5)).unwrap();
        let err = fetcher.fetch_status("someone").await.unwrap_err();

        match err {
            TrackerError::UpstreamStatus { status } => assert_eq!(status, 500),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_url_encodes_user() {
        let fetcher = JudgeFetcher::new(
            "https://www.acmicpc.net/",
            Duration::from_secs(5),
        )
        .unwrap();
        let url = fetcher.status_url("한글 id").unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("result_id=4"));
        assert!(!query.contains("한글"));
        assert_eq!(url.path(), "/status");
    }
}
