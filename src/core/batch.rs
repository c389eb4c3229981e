use crate::core::judge::JudgeService;
use crate::domain::model::{BatchSummary, Member};
use crate::domain::ports::{SolvedStore, StatusSource};
use std::time::Duration;

/// Pause between roster members. Hammering the judge without a gap gets the
/// scraper's IP throttled, so the walk is deliberately sequential and slow.
pub const DEFAULT_MEMBER_DELAY_MS: u64 = 1000;

/// Walks the member roster, re-derives each member's solved flag and writes
/// it back through the [`SolvedStore`]. A failing member is logged and
/// skipped; the walk always covers the whole roster.
pub struct BatchRunner<S, P> {
    service: JudgeService<S>,
    store: P,
    member_delay: Duration,
}

impl<S: StatusSource, P: SolvedStore> BatchRunner<S, P> {
    pub fn new(service: JudgeService<S>, store: P, member_delay: Duration) -> Self {
        Self {
            service,
            store,
            member_delay,
        }
    }

    pub async fn run(&self, roster: &[Member]) -> BatchSummary {
        let mut summary = BatchSummary::default();
        tracing::info!(members = roster.len(), "starting roster walk");

        for (index, member) in roster.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.member_delay).await;
            }

            let solved = match self.service.solved_yesterday(&member.handle).await {
                Ok(solved) => solved,
                Err(e) => {
                    tracing::warn!(member = %member.id, handle = %member.handle, error = %e,
                        "classification failed, skipping member");
                    summary.failed += 1;
                    continue;
                }
            };

            match self.store.set_solved(member, solved).await {
                Ok(()) => {
                    tracing::info!(member = %member.id, solved, "flag updated");
                    summary.updated += 1;
                    if solved {
                        summary.solved += 1;
                    }
                }
                Err(e) => {
                    tracing::warn!(member = %member.id, error = %e, "backend write failed");
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            updated = summary.updated,
            solved = summary.solved,
            failed = summary.failed,
            "roster walk finished"
        );
        summary
    }
}
