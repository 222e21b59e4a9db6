//! In-memory book repository.

use super::Collection;
use crate::BookRepository;
use async_trait::async_trait;
use biblioteca_core::{BibliotecaResult, Book, BookId};
use tracing::debug;

/// Book repository backed by the in-memory store.
#[derive(Default)]
pub struct MemoryBookRepository {
    collection: Collection<BookId, Book>,
}

impl MemoryBookRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collection: Collection::new(),
        }
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_id(&self, id: BookId) -> BibliotecaResult<Option<Book>> {
        Ok(self.collection.get(&id))
    }

    async fn find_all(&self) -> BibliotecaResult<Vec<Book>> {
        Ok(self.collection.all())
    }

    async fn find_by_title_contains(&self, substring: &str) -> BibliotecaResult<Vec<Book>> {
        let needle = substring.to_lowercase();
        let matches = self
            .collection
            .filter(|book| book.title.to_lowercase().contains(&needle));

        debug!("Title search '{}' matched {} book(s)", substring, matches.len());
        Ok(matches)
    }

    async fn save(&self, book: &Book) -> BibliotecaResult<Book> {
        self.collection.insert(book.id, book.clone());
        Ok(book.clone())
    }

    async fn update(&self, book: &Book) -> BibliotecaResult<Option<Book>> {
        Ok(self.collection.replace(&book.id, book.clone()))
    }

    async fn delete(&self, id: BookId) -> BibliotecaResult<bool> {
        Ok(self.collection.remove(&id).is_some())
    }

    async fn count(&self) -> BibliotecaResult<u64> {
        Ok(self.collection.len() as u64)
    }
}

impl std::fmt::Debug for MemoryBookRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBookRepository").finish_non_exhaustive()
    }
}
