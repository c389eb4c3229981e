use crate::domain::model::Member;
use crate::domain::ports::SolvedStore;
use crate::utils::error::{Result, TrackerError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

/// Writes member flags to the group backend's REST interface (PostgREST
/// style: `PATCH /rest/v1/profiles?id=eq.<id>` plus an RPC for the penalty
/// ledger). Authentication is a service-role key sent as both `apikey` and
/// bearer token.
#[derive(Debug, Clone)]
pub struct RestSolvedStore {
    client: Client,
    base_url: String,
    service_key: String,
}

impl RestSolvedStore {
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            service_key: service_key.into(),
        }
    }

    fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=minimal")
    }

    async fn check(response: reqwest::Response, what: &str) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let detail = response.text().await.unwrap_or_default();
        Err(TrackerError::StoreError {
            message: format!("{} returned {}: {}", what, status.as_u16(), detail),
        })
    }
}

#[async_trait]
impl SolvedStore for RestSolvedStore {
    async fn set_solved(&self, member: &Member, solved: bool) -> Result<()> {
        let response = self
            .authed(self.client.patch(self.rest_url("profiles")))
            .query(&[("id", format!("eq.{}", member.id))])
            .json(&json!({ "today_solved": solved }))
            .send()
            .await?;
        Self::check(response, "profile update").await
    }

    async fn apply_penalties(&self) -> Result<()> {
        // The ledger insert lives in the database as an RPC so membership
        // joins stay server-side.
        let response = self
            .authed(self.client.post(self.rest_url("rpc/insert_punishments")))
            .json(&json!({}))
            .send()
            .await?;
        Self::check(response, "insert_punishments").await?;

        // Reset every flag for the new day. neq filter mirrors the backend
        // script: only rows that are still true need touching.
        let response = self
            .authed(self.client.patch(self.rest_url("profiles")))
            .query(&[("today_solved", "neq.false")])
            .json(&json!({ "today_solved": false }))
            .send()
            .await?;
        Self::check(response, "flag reset").await
    }
}
