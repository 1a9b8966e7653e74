use tokio::sync::mpsc;
use crate::core::events::TransactionEntry;
use crate::core::library::{LibraryError, LibraryResult};

// Builds the bounded FIFO channel connecting catalogue mutations to the log
// consumer. Capacity is the sole backpressure signal: publishers wait when the
// buffer is full, entries are never dropped.
pub fn transaction_log(capacity: usize) -> (TransactionLogPublisher, TransactionLogConsumer) {
    let (tx, rx) = mpsc::channel(capacity);
    (TransactionLogPublisher { tx }, TransactionLogConsumer { rx })
}

#[derive(Clone)]
pub struct TransactionLogPublisher {
    tx: mpsc::Sender<TransactionEntry>,
}

impl TransactionLogPublisher {
    // Waits while the channel is full; fails only when the consumer is gone.
    pub async fn publish(&self, entry: TransactionEntry) -> LibraryResult<()> {
        self.tx.send(entry).await.map_err(|err| {
            LibraryError::runtime(
                format!("transaction log closed, dropped entry {}", err.0.entry_id).as_str(), None)
        })
    }

    pub fn capacity(&self) -> usize {
        self.tx.max_capacity()
    }
}

pub struct TransactionLogConsumer {
    rx: mpsc::Receiver<TransactionEntry>,
}

impl TransactionLogConsumer {
    // Waits while the channel is empty; None once every publisher has been
    // dropped and the buffer is drained.
    pub async fn consume(&mut self) -> Option<TransactionEntry> {
        self.rx.recv().await
    }
}
