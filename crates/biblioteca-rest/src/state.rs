//! Application state for Axum handlers.

use biblioteca_service::{AuthorService, BookService, GenreService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<dyn BookService>,
    pub author_service: Arc<dyn AuthorService>,
    pub genre_service: Arc<dyn GenreService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        book_service: Arc<dyn BookService>,
        author_service: Arc<dyn AuthorService>,
        genre_service: Arc<dyn GenreService>,
    ) -> Self {
        Self {
            book_service,
            author_service,
            genre_service,
        }
    }
}
