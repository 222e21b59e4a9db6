//! In-memory genre repository.

use super::Collection;
use crate::GenreRepository;
use async_trait::async_trait;
use biblioteca_core::{BibliotecaResult, Genre, GenreId};

/// Genre repository backed by the in-memory store.
#[derive(Default)]
pub struct MemoryGenreRepository {
    collection: Collection<GenreId, Genre>,
}

impl MemoryGenreRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collection: Collection::new(),
        }
    }
}

#[async_trait]
impl GenreRepository for MemoryGenreRepository {
    async fn find_by_id(&self, id: GenreId) -> BibliotecaResult<Option<Genre>> {
        Ok(self.collection.get(&id))
    }

    async fn find_all(&self) -> BibliotecaResult<Vec<Genre>> {
        Ok(self.collection.all())
    }

    async fn save(&self, genre: &Genre) -> BibliotecaResult<Genre> {
        self.collection.insert(genre.id, genre.clone());
        Ok(genre.clone())
    }

    async fn update(&self, genre: &Genre) -> BibliotecaResult<Option<Genre>> {
        Ok(self.collection.replace(&genre.id, genre.clone()))
    }

    async fn delete(&self, id: GenreId) -> BibliotecaResult<bool> {
        Ok(self.collection.remove(&id).is_some())
    }

    async fn count(&self) -> BibliotecaResult<u64> {
        Ok(self.collection.len() as u64)
    }
}

impl std::fmt::Debug for MemoryGenreRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGenreRepository").finish_non_exhaustive()
    }
}
