//! Service wiring.
//!
//! Builds the repository, service and state graph for the REST layer. The
//! catalog lives in an in-process document store, so the whole graph is
//! assembled from three shared collections.

use biblioteca_repository::{
    memory::{MemoryAuthorRepository, MemoryBookRepository, MemoryGenreRepository},
    AuthorRepository, BookRepository, GenreRepository,
};
use biblioteca_rest::AppState;
use biblioteca_service::{
    AuthorServiceImpl, BookHydrator, BookServiceImpl, GenreServiceImpl,
};
use std::sync::Arc;

/// Builds the application state backed by fresh in-memory collections.
#[must_use]
pub fn build_app_state() -> AppState {
    let author_repository: Arc<dyn AuthorRepository> = Arc::new(MemoryAuthorRepository::new());
    let genre_repository: Arc<dyn GenreRepository> = Arc::new(MemoryGenreRepository::new());
    let book_repository: Arc<dyn BookRepository> = Arc::new(MemoryBookRepository::new());

    let hydrator = BookHydrator::new(author_repository.clone(), genre_repository.clone());

    let book_service = Arc::new(BookServiceImpl::new(book_repository, hydrator));
    let author_service = Arc::new(AuthorServiceImpl::new(author_repository));
    let genre_service = Arc::new(GenreServiceImpl::new(genre_repository));

    AppState::new(book_service, author_service, genre_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblioteca_service::CreateAuthorRequest;

    #[tokio::test]
    async fn test_wired_state_serves_requests() {
        let state = build_app_state();

        let author = state
            .author_service
            .create_author(CreateAuthorRequest {
                name: "Machado de Assis".to_string(),
            })
            .await
            .unwrap();

        let found = state.author_service.get_author(author.id).await.unwrap();
        assert_eq!(found.name, "Machado de Assis");
    }
}
