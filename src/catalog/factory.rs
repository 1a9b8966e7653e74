use crate::catalog::domain::LibraryService;
use crate::catalog::domain::service::LibraryServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_transaction_sink;
use crate::gateway::TransactionSinkVia;

pub fn create_library_service(config: &Configuration, via: TransactionSinkVia) -> Box<dyn LibraryService> {
    let sink = create_transaction_sink(via);
    Box::new(LibraryServiceImpl::new(config, sink))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::factory::create_library_service;
    use crate::core::domain::Configuration;
    use crate::gateway::TransactionSinkVia;

    #[tokio::test]
    async fn test_should_create_working_service() {
        let config = Configuration::with_commit_delay(Duration::ZERO);
        let service = create_library_service(&config, TransactionSinkVia::Memory);
        service.add_book(&BookEntity::new("1", "Dune", "Frank Herbert", 1965)).await.expect("should add book");
        let books = service.list_books().await.expect("should list books");
        assert_eq!(1, books.len());
        service.shutdown().await.expect("should shutdown");
    }
}
