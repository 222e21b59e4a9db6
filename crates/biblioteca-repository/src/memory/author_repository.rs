//! In-memory author repository.

use super::Collection;
use crate::AuthorRepository;
use async_trait::async_trait;
use biblioteca_core::{Author, AuthorId, BibliotecaResult};

/// Author repository backed by the in-memory store.
#[derive(Default)]
pub struct MemoryAuthorRepository {
    collection: Collection<AuthorId, Author>,
}

impl MemoryAuthorRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collection: Collection::new(),
        }
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthorRepository {
    async fn find_by_id(&self, id: AuthorId) -> BibliotecaResult<Option<Author>> {
        Ok(self.collection.get(&id))
    }

    async fn find_all(&self) -> BibliotecaResult<Vec<Author>> {
        Ok(self.collection.all())
    }

    async fn save(&self, author: &Author) -> BibliotecaResult<Author> {
        self.collection.insert(author.id, author.clone());
        Ok(author.clone())
    }

    async fn update(&self, author: &Author) -> BibliotecaResult<Option<Author>> {
        Ok(self.collection.replace(&author.id, author.clone()))
    }

    async fn delete(&self, id: AuthorId) -> BibliotecaResult<bool> {
        Ok(self.collection.remove(&id).is_some())
    }

    async fn count(&self) -> BibliotecaResult<u64> {
        Ok(self.collection.len() as u64)
    }
}

impl std::fmt::Debug for MemoryAuthorRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryAuthorRepository").finish_non_exhaustive()
    }
}
