//! Shared many-producer, many-consumer work queue

use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use super::target::SyncTarget;

/// Producer handle. Clone one per producer; the queue closes when the last
/// clone is dropped.
#[derive(Clone)]
pub struct QueueSender {
    tx: mpsc::Sender<SyncTarget>,
}

/// Consumer handle shared by every worker
#[derive(Clone)]
pub struct QueueReceiver {
    rx: Arc<Mutex<mpsc::Receiver<SyncTarget>>>,
}

/// Creates a bounded queue holding at most `capacity` pending targets
pub fn work_queue(capacity: usize) -> (QueueSender, QueueReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (
        QueueSender { tx },
        QueueReceiver {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

impl QueueSender {
    /// Pushes a target, waiting while the queue is full.
    ///
    /// Fails only when every receiver is gone; the target is handed back.
    pub async fn push(&self, target: SyncTarget) -> Result<(), SyncTarget> {
        self.tx.send(target).await.map_err(|e| e.0)
    }
}

impl QueueReceiver {
    /// Claims the next target. Returns `None` once the queue is closed and drained.
    pub async fn pop(&self) -> Option<SyncTarget> {
        self.rx.lock().await.recv().await
    }
}
