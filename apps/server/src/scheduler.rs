//! Background sweep of expired password recovery codes.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::main_lib::AppState;

/// Starts the periodic recovery-code sweep. The first pass runs immediately.
pub fn start_recovery_sweeper(state: Arc<AppState>, every: Duration) {
    tokio::spawn(async move {
        info!("Recovery code sweeper started ({}s interval)", every.as_secs());
        let mut ticker = interval(every);

        loop {
            ticker.tick().await;
            run_sweep(&state).await;
        }
    });
}

async fn run_sweep(state: &Arc<AppState>) {
    match state.recovery_service.purge_expired().await {
        Ok(0) => debug!("Recovery sweep: nothing expired"),
        Ok(removed) => info!("Recovery sweep removed {} expired codes", removed),
        Err(e) => warn!("Recovery sweep failed: {}", e),
    }
}
