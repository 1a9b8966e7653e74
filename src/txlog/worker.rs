use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::sink::TransactionSink;
use crate::txlog::channel::TransactionLogConsumer;

// TransactionLogWorker drains the transaction-log channel on a background
// task, committing one entry at a time to the sink. The post-commit delay
// simulates downstream persistence cost and is the throttle that causes the
// channel to exert backpressure on publishers under sustained load.
pub struct TransactionLogWorker {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl TransactionLogWorker {
    pub fn spawn(mut consumer: TransactionLogConsumer,
                 sink: Arc<dyn TransactionSink>, commit_delay: Duration) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let handle = tokio::spawn(async move {
            loop {
                let entry = tokio::select! {
                    _ = token.cancelled() => break,
                    entry = consumer.consume() => match entry {
                        Some(entry) => entry,
                        // Every publisher dropped and buffer drained.
                        None => break,
                    },
                };
                if let Err(err) = sink.commit(&entry).await {
                    warn!("failed to commit transaction entry {}: {}", entry.entry_id, err);
                }
                if !commit_delay.is_zero() {
                    tokio::select! {
                        _ = token.cancelled() => break,
                        _ = tokio::time::sleep(commit_delay) => {}
                    }
                }
            }
            debug!("transaction log worker stopped");
        });
        Self { cancel, handle }
    }

    // Unblocks any pending consume or delay; the worker exits without
    // committing a partial entry and without requeuing.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub async fn join(self) -> LibraryResult<()> {
        self.handle.await.map_err(|err| {
            LibraryError::runtime(format!("transaction log worker {:?}", err).as_str(), None)
        })
    }
}
