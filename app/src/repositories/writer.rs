//! Background snapshot writer
//!
//! Commands mutate in-memory state synchronously and hand the resulting
//! snapshot to this task. Writes are applied in the order they were queued.
//! A failed write is logged and dropped; it never reaches the caller.

use super::{Repositories, Snapshot};
use crate::error::{PersistenceError, PersistenceResult};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

enum Command {
    Save(Snapshot),
    Flush(oneshot::Sender<()>),
}

/// Handle to the writer task
///
/// Cloning is cheap; the task exits once every handle is dropped.
#[derive(Clone)]
pub struct SnapshotWriter {
    tx: mpsc::UnboundedSender<Command>,
}

impl SnapshotWriter {
    /// Spawn the writer on the current tokio runtime
    pub fn spawn(repositories: Repositories) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(repositories, rx));
        (Self { tx }, handle)
    }

    /// Queue a snapshot for writing
    pub fn enqueue(&self, snapshot: Snapshot) {
        let slot = snapshot.slot();
        if self.tx.send(Command::Save(snapshot)).is_err() {
            warn!(slot, "Snapshot writer is closed, dropping write");
        }
    }

    /// Wait until every snapshot queued so far has been written
    pub async fn flush(&self) -> PersistenceResult<()> {
        let (done_tx, done_rx) = oneshot::channel();
        self.tx
            .send(Command::Flush(done_tx))
            .map_err(|_| PersistenceError::WriterClosed)?;
        done_rx.await.map_err(|_| PersistenceError::WriterClosed)
    }
}

async fn run(repositories: Repositories, mut rx: mpsc::UnboundedReceiver<Command>) {
    while let Some(command) = rx.recv().await {
        match command {
            Command::Save(snapshot) => {
                let slot = snapshot.slot();
                match repositories.save(&snapshot).await {
                    Ok(()) => debug!(slot, "Snapshot saved"),
                    Err(e) => warn!(slot, error = %e, "Failed to save snapshot"),
                }
            }
            Command::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    debug!("Snapshot writer stopped");
}
