use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::LibraryService;
use crate::catalog::store::CatalogStore;
use crate::core::domain::Configuration;
use crate::core::events::TransactionEntry;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::gateway::sink::TransactionSink;
use crate::txlog::channel::{transaction_log, TransactionLogPublisher};
use crate::txlog::worker::TransactionLogWorker;

pub struct LibraryServiceImpl {
    catalog: tokio::sync::Mutex<CatalogStore>,
    // Dropped on shutdown so the channel closes and the worker can drain.
    publisher: std::sync::Mutex<Option<TransactionLogPublisher>>,
    worker: tokio::sync::Mutex<Option<TransactionLogWorker>>,
}

impl LibraryServiceImpl {
    pub fn new(config: &Configuration, sink: Arc<dyn TransactionSink>) -> Self {
        let (publisher, consumer) = transaction_log(config.max_log_capacity);
        let worker = TransactionLogWorker::spawn(consumer, sink, config.commit_delay);
        Self {
            catalog: tokio::sync::Mutex::new(CatalogStore::new()),
            publisher: std::sync::Mutex::new(Some(publisher)),
            worker: tokio::sync::Mutex::new(Some(worker)),
        }
    }

    // Publishing happens outside the catalogue lock; it may wait when the
    // channel is full, which is the intended backpressure on callers.
    async fn publish(&self, entry: TransactionEntry) -> LibraryResult<()> {
        let publisher = self.publisher.lock()
            .map_err(|_| LibraryError::runtime("transaction log publisher poisoned", None))?
            .clone();
        match publisher {
            Some(publisher) => publisher.publish(entry).await,
            None => Err(LibraryError::runtime("transaction log is shut down", None)),
        }
    }
}

#[async_trait]
impl LibraryService for LibraryServiceImpl {
    async fn add_book(&self, book: &BookEntity) -> LibraryResult<()> {
        {
            let mut catalog = self.catalog.lock().await;
            catalog.add(book.clone());
        }
        self.publish(TransactionEntry::added(book.title.as_str())).await
    }

    async fn remove_book(&self, book: &BookEntity) -> LibraryResult<()> {
        {
            let mut catalog = self.catalog.lock().await;
            // Silent no-op when absent; the removal is still logged, matching
            // the original system's behavior.
            catalog.remove(book);
        }
        self.publish(TransactionEntry::removed(book.title.as_str())).await
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookEntity> {
        let mut catalog = self.catalog.lock().await;
        catalog.find(id).map(|b| b.clone())
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookEntity>> {
        let catalog = self.catalog.lock().await;
        Ok(catalog.list_all())
    }

    async fn borrow_book(&self, id: &str) -> LibraryResult<BookEntity> {
        // find-check-mutate is atomic under the catalogue lock.
        let borrowed = {
            let mut catalog = self.catalog.lock().await;
            let book = catalog.find(id)?;
            if !book.is_available() {
                return Err(LibraryError::unavailable(
                    format!("This book is currently unavailable: {}", book.title).as_str(), true));
            }
            book.book_status = BookStatus::CheckedOut;
            book.version += 1;
            book.updated_at = Utc::now().naive_utc();
            book.clone()
        };
        self.publish(TransactionEntry::borrowed(borrowed.title.as_str())).await?;
        Ok(borrowed)
    }

    async fn return_book(&self, id: &str) -> LibraryResult<BookEntity> {
        let returned = {
            let mut catalog = self.catalog.lock().await;
            let book = catalog.find(id)?;
            // Unconditional: returning an available book is a logged no-op.
            book.book_status = BookStatus::Available;
            book.version += 1;
            book.updated_at = Utc::now().naive_utc();
            book.clone()
        };
        self.publish(TransactionEntry::returned(returned.title.as_str())).await?;
        Ok(returned)
    }

    async fn shutdown(&self) -> LibraryResult<()> {
        let publisher = self.publisher.lock()
            .map_err(|_| LibraryError::runtime("transaction log publisher poisoned", None))?
            .take();
        drop(publisher);
        let worker = self.worker.lock().await.take();
        match worker {
            Some(worker) => {
                debug!("waiting for transaction log worker to drain");
                worker.join().await
            }
            None => Ok(()),
        }
    }
}
