use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};

// CatalogStore is the in-memory, insertion-ordered collection of books. It is
// owned exclusively by the library service, which serializes all access.
#[derive(Debug, Default)]
pub struct CatalogStore {
    books: Vec<BookEntity>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
        }
    }

    // Appends at the end. Identifier uniqueness is not enforced; with
    // duplicate ids, find returns the earliest-inserted match.
    pub fn add(&mut self, book: BookEntity) {
        self.books.push(book);
    }

    // Removes the first book equal to the argument; silent no-op if absent.
    pub fn remove(&mut self, book: &BookEntity) {
        if let Some(pos) = self.books.iter().position(|b| b == book) {
            self.books.remove(pos);
        }
    }

    pub fn find(&mut self, book_id: &str) -> LibraryResult<&mut BookEntity> {
        self.books.iter_mut()
            .find(|b| b.book_id == book_id)
            .ok_or_else(|| LibraryError::not_found(
                format!("No book found with ID: {}", book_id).as_str()))
    }

    pub fn list_all(&self) -> Vec<BookEntity> {
        self.books.clone()
    }
}
