//! Periodic cleanup of idle editor sessions.
//!
//! A session that stops sending events keeps its pending anchor forever;
//! this job drops sessions idle longer than the configured limit.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::editor::EditorSessions;

/// How often the pruning job runs.
const PRUNE_INTERVAL: Duration = Duration::from_secs(60);

/// Run the session pruning loop until `cancel` is triggered.
pub async fn run(sessions: Arc<EditorSessions>, max_idle: Duration, cancel: CancellationToken) {
    tracing::info!(
        max_idle_secs = max_idle.as_secs(),
        interval_secs = PRUNE_INTERVAL.as_secs(),
        "Session pruning job started"
    );

    let mut interval = tokio::time::interval(PRUNE_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session pruning job stopping");
                break;
            }
            _ = interval.tick() => {
                let pruned = sessions.prune_idle(max_idle).await;
                if pruned > 0 {
                    tracing::info!(pruned, "Session pruning: dropped idle editor sessions");
                } else {
                    tracing::debug!("Session pruning: nothing to drop");
                }
            }
        }
    }
}
