use crate::domain::model::Member;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound boundary to the judge site: fetch the raw status-page markup for
/// one user. One network call per invocation, no retry.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self, user: &str) -> Result<String>;
}

/// Outbound boundary to the group backend. The batch jobs own all writes to
/// the per-member solved flag and the penalty ledger; nothing else in the
/// crate touches persisted state.
#[async_trait]
pub trait SolvedStore: Send + Sync {
    async fn set_solved(&self, member: &Member, solved: bool) -> Result<()>;

    /// Insert penalty rows for members whose flag is still false, then reset
    /// every flag for the next day.
    async fn apply_penalties(&self) -> Result<()>;
}
