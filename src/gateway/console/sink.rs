use async_trait::async_trait;
use tracing::info;
use crate::core::events::TransactionEntry;
use crate::core::library::LibraryResult;
use crate::gateway::sink::TransactionSink;

// ConsoleSink commits entries to standard output, one line per entry.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TransactionSink for ConsoleSink {
    async fn commit(&self, entry: &TransactionEntry) -> LibraryResult<()> {
        println!("{}", entry.to_log_line());
        info!("committed transaction entry {} {}", entry.entry_id, entry.message);
        Ok(())
    }
}
