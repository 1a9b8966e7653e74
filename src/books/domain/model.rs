use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookEntity abstracts a physical book in the catalogue. Identifiers come
// from the caller and uniqueness is not enforced; lookups return the first
// match in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub book_status: BookStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(book_id: &str, title: &str, author: &str, publication_year: i32) -> Self {
        Self {
            book_id: book_id.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            book_status: BookStatus::Available,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
    fn is_available(&self) -> bool {
        self.book_status == BookStatus::Available
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Book [ID: {}, Title: {}, Author: {}, Year: {}, Available: {}]",
               self.book_id, self.title, self.author, self.publication_year, self.is_available())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;
    use crate::core::library::BookStatus;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("1", "Dune", "Frank Herbert", 1965);
        assert_eq!("1", book.id().as_str());
        assert_eq!(0, book.version());
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Frank Herbert", book.author.as_str());
        assert_eq!(1965, book.publication_year);
        assert_eq!(BookStatus::Available, book.book_status);
        assert!(book.is_available());
    }

    #[tokio::test]
    async fn test_should_format_book_details() {
        let book = BookEntity::new("1", "Dune", "Frank Herbert", 1965);
        assert_eq!("Book [ID: 1, Title: Dune, Author: Frank Herbert, Year: 1965, Available: true]",
                   book.to_string());
    }
}
