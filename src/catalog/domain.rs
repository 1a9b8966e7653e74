pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

// LibraryService is the mutation boundary around the catalogue: every
// state-changing operation appends one entry to the transaction log.
#[async_trait]
pub trait LibraryService: Sync + Send {
    async fn add_book(&self, book: &BookEntity) -> LibraryResult<()>;
    async fn remove_book(&self, book: &BookEntity) -> LibraryResult<()>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookEntity>;
    async fn list_books(&self) -> LibraryResult<Vec<BookEntity>>;
    async fn borrow_book(&self, id: &str) -> LibraryResult<BookEntity>;
    async fn return_book(&self, id: &str) -> LibraryResult<BookEntity>;
    // Closes the transaction log and joins the consumer after it has drained
    // every buffered entry. Operations after shutdown fail with Runtime.
    async fn shutdown(&self) -> LibraryResult<()>;
}
