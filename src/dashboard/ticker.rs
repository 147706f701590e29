use time::OffsetDateTime;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::dashboard::events;
use crate::state::AppState;

/// Spawns the single feed ticker. One event per period, folded into the
/// shared dashboard synchronously; the task ends with the process.
pub fn spawn(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(state.config.feed.tick());
        // The first tick resolves immediately; the demo waits a full period
        // before the first event.
        interval.tick().await;

        loop {
            interval.tick().await;
            let event = events::next_event(&mut rand::thread_rng(), OffsetDateTime::now_utc());
            debug!(
                event_id = event.id,
                user = %event.user,
                risk = ?event.risk,
                decision = ?event.decision,
                "live feed event generated"
            );
            state.dashboard.write().await.record(event);
        }
    })
}
