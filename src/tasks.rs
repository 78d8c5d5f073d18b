//! Async task plumbing for the startup fetch.
//!
//! The one network fetch runs on a background tokio task and reports back
//! through an unbounded channel that the main loop drains with `try_recv()`,
//! so the terminal stays responsive while the request is in flight.
//!
//! If the UI is torn down before the fetch completes, the receiver is gone
//! and the completion send is discarded (`let _ = tx.send(..)`); no state is
//! ever written after teardown.

use tokio::sync::mpsc;

use crate::api::{UserClient, UserRecord};

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum ApiMessage {
    /// Result of the startup user-batch fetch.
    UsersFetched(Result<Vec<UserRecord>, String>),
}

/// Spawns background tasks for async operations.
#[derive(Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<ApiMessage>,
}

impl TaskSpawner {
    /// Create a new spawner with the given channel sender.
    pub fn new(tx: mpsc::UnboundedSender<ApiMessage>) -> Self {
        Self { tx }
    }

    /// Spawn the single user-batch fetch.
    ///
    /// One best-effort attempt per application lifetime; the result, success
    /// or failure, arrives as [`ApiMessage::UsersFetched`].
    pub fn spawn_fetch_users(&self, client: &UserClient, count: u32) {
        let tx = self.tx.clone();
        let client = client.clone();
        tokio::spawn(async move {
            let result = client.fetch_users(count).await.map_err(|e| e.to_string());
            let _ = tx.send(ApiMessage::UsersFetched(result));
        });
    }
}

/// Create a new task channel and spawner.
///
/// The receiver is polled in the main event loop; the spawner starts tasks.
pub fn create_task_channel() -> (mpsc::UnboundedReceiver<ApiMessage>, TaskSpawner) {
    let (tx, rx) = mpsc::unbounded_channel();
    (rx, TaskSpawner::new(tx))
}
