use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::{serializer, to_rfc3339};

// TransactionKind defines the catalogue mutation a log entry records
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum TransactionKind {
    Added,
    Removed,
    Borrowed,
    Returned,
}

// TransactionEntry abstracts one immutable record of a catalogue mutation,
// produced by the library service and consumed exactly once by the log worker.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TransactionEntry {
    pub entry_id: String,
    pub kind: TransactionKind,
    pub message: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl TransactionEntry {
    pub fn added(title: &str) -> Self {
        Self::build(TransactionKind::Added, format!("Book added: {}", title))
    }

    pub fn removed(title: &str) -> Self {
        Self::build(TransactionKind::Removed, format!("Book removed: {}", title))
    }

    pub fn borrowed(title: &str) -> Self {
        Self::build(TransactionKind::Borrowed, format!("Book borrowed: {}", title))
    }

    pub fn returned(title: &str) -> Self {
        Self::build(TransactionKind::Returned, format!("Book returned: {}", title))
    }

    // The line a sink emits when the entry is committed.
    pub fn to_log_line(&self) -> String {
        format!("Transaction Log: {} - {}", self.message, to_rfc3339(self.created_at))
    }

    fn build(kind: TransactionKind, message: String) -> TransactionEntry {
        TransactionEntry {
            entry_id: Uuid::new_v4().to_string(),
            kind,
            message,
            created_at: Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::{TransactionEntry, TransactionKind};

    #[tokio::test]
    async fn test_should_build_added() {
        let entry = TransactionEntry::added("Dune");
        assert_eq!("Book added: Dune", entry.message.as_str());
        assert_eq!(TransactionKind::Added, entry.kind);
    }

    #[tokio::test]
    async fn test_should_build_removed() {
        let entry = TransactionEntry::removed("Dune");
        assert_eq!("Book removed: Dune", entry.message.as_str());
        assert_eq!(TransactionKind::Removed, entry.kind);
    }

    #[tokio::test]
    async fn test_should_build_borrowed() {
        let entry = TransactionEntry::borrowed("Dune");
        assert_eq!("Book borrowed: Dune", entry.message.as_str());
        assert_eq!(TransactionKind::Borrowed, entry.kind);
    }

    #[tokio::test]
    async fn test_should_build_returned() {
        let entry = TransactionEntry::returned("Dune");
        assert_eq!("Book returned: Dune", entry.message.as_str());
        assert_eq!(TransactionKind::Returned, entry.kind);
    }

    #[tokio::test]
    async fn test_should_format_log_line() {
        let entry = TransactionEntry::added("Dune");
        let line = entry.to_log_line();
        assert!(line.starts_with("Transaction Log: Book added: Dune - "));
    }

    #[tokio::test]
    async fn test_should_serialize_entry() {
        let entry = TransactionEntry::borrowed("Dune");
        let json = serde_json::to_string(&entry).expect("should serialize entry");
        let parsed: TransactionEntry = serde_json::from_str(json.as_str()).expect("should parse entry");
        assert_eq!(entry, parsed);
    }
}
