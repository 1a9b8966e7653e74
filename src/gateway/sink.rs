use async_trait::async_trait;
use crate::core::events::TransactionEntry;
use crate::core::library::LibraryResult;

// TransactionSink is the commit target for drained log entries.
#[async_trait]
pub trait TransactionSink: Sync + Send {
    async fn commit(&self, entry: &TransactionEntry) -> LibraryResult<()>;
}
