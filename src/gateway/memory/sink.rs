use std::sync::Mutex;
use async_trait::async_trait;
use crate::core::events::TransactionEntry;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::sink::TransactionSink;

// MemorySink records committed lines in memory so tests can assert
// exactly-once commits without capturing standard output.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(_) => Vec::new(),
        }
    }
}

#[async_trait]
impl TransactionSink for MemorySink {
    async fn commit(&self, entry: &TransactionEntry) -> LibraryResult<()> {
        let mut lines = self.lines.lock()
            .map_err(|_| LibraryError::runtime("memory sink poisoned", None))?;
        lines.push(entry.to_log_line());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::TransactionEntry;
    use crate::gateway::memory::sink::MemorySink;
    use crate::gateway::sink::TransactionSink;

    #[tokio::test]
    async fn test_should_record_committed_lines() {
        let sink = MemorySink::new();
        sink.commit(&TransactionEntry::added("Dune")).await.expect("should commit");
        sink.commit(&TransactionEntry::borrowed("Dune")).await.expect("should commit");
        let lines = sink.lines();
        assert_eq!(2, lines.len());
        assert!(lines[0].starts_with("Transaction Log: Book added: Dune - "));
        assert!(lines[1].starts_with("Transaction Log: Book borrowed: Dune - "));
    }
}
