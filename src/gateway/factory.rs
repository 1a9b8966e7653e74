use std::sync::Arc;
use crate::gateway::console::sink::ConsoleSink;
use crate::gateway::memory::sink::MemorySink;
use crate::gateway::sink::TransactionSink;
use crate::gateway::TransactionSinkVia;

pub fn create_transaction_sink(via: TransactionSinkVia) -> Arc<dyn TransactionSink> {
    match via {
        TransactionSinkVia::Console => {
            Arc::new(ConsoleSink::new())
        }
        TransactionSinkVia::Memory => {
            Arc::new(MemorySink::new())
        }
    }
}
