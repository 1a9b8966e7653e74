pub mod factory;
pub mod sink;

pub mod console {
    pub mod sink;
}

pub mod memory {
    pub mod sink;
}

// TransactionSinkVia defines which sink implementation commits log entries.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TransactionSinkVia {
    Console,
    Memory,
}
