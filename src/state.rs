use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::{broadcast, RwLock};

use crate::round::Round;

const DEFAULT_SOLVE_TIMEOUT_SECS: u64 = 5;

/// Shared application state: the single editable round, the snapshot feed
/// for WebSocket clients, and solver bookkeeping.
pub struct AppState {
    pub round: RwLock<Round>,
    pub updates: broadcast::Sender<String>,
    pub next_solve_id: AtomicU64,
    pub solve_timeout: Duration,
}

pub type SharedState = Arc<AppState>;

pub fn new_state() -> SharedState {
    let (updates, _) = broadcast::channel(16);
    Arc::new(AppState {
        round: RwLock::new(Round::new()),
        updates,
        next_solve_id: AtomicU64::new(0),
        solve_timeout: solve_timeout_from_env(),
    })
}

fn solve_timeout_from_env() -> Duration {
    let secs = std::env::var("SOLVE_TIMEOUT_SECS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_SOLVE_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

impl AppState {
    /// Push a fresh appstate snapshot to every connected client. Send
    /// errors just mean nobody is listening.
    pub fn publish(&self, snapshot: Value) {
        let _ = self.updates.send(snapshot.to_string());
    }
}
