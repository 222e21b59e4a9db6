//! Reference resolution for books ("populate").
//!
//! Every book-returning path goes through the hydrator so callers never see
//! bare reference identifiers.

use biblioteca_core::{BibliotecaResult, Book, HydratedBook};
use biblioteca_repository::{AuthorRepository, GenreRepository};
use std::sync::Arc;
use tracing::debug;

/// Resolves a book's author/genre references into embedded documents.
///
/// Dangling references are a soft failure: author/genre deletion is not
/// guarded against, so a missing target resolves to `None` instead of
/// failing the read. Store failures still propagate.
pub struct BookHydrator {
    authors: Arc<dyn AuthorRepository>,
    genres: Arc<dyn GenreRepository>,
}

impl BookHydrator {
    /// Creates a new hydrator over the author and genre stores.
    pub fn new(authors: Arc<dyn AuthorRepository>, genres: Arc<dyn GenreRepository>) -> Self {
        Self { authors, genres }
    }

    /// Resolves one book.
    pub async fn resolve(&self, book: Book) -> BibliotecaResult<HydratedBook> {
        let author = self.authors.find_by_id(book.author_id).await?;
        let genre = self.genres.find_by_id(book.genre_id).await?;

        if author.is_none() {
            debug!("Book {} has a dangling author reference {}", book.id, book.author_id);
        }
        if genre.is_none() {
            debug!("Book {} has a dangling genre reference {}", book.id, book.genre_id);
        }

        Ok(HydratedBook::compose(book, author, genre))
    }

    /// Resolves a batch of books, preserving input order.
    pub async fn resolve_many(&self, books: Vec<Book>) -> BibliotecaResult<Vec<HydratedBook>> {
        let mut hydrated = Vec::with_capacity(books.len());
        for book in books {
            hydrated.push(self.resolve(book).await?);
        }
        Ok(hydrated)
    }
}

impl std::fmt::Debug for BookHydrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookHydrator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblioteca_core::{Author, AuthorId, Genre, GenreId};
    use biblioteca_repository::{MemoryAuthorRepository, MemoryGenreRepository};

    async fn seeded_hydrator() -> (BookHydrator, Author, Genre) {
        let authors = Arc::new(MemoryAuthorRepository::new());
        let genres = Arc::new(MemoryGenreRepository::new());

        let author = Author::new("Machado de Assis".to_string());
        let genre = Genre::new("Romance".to_string());
        authors.save(&author).await.unwrap();
        genres.save(&genre).await.unwrap();

        (BookHydrator::new(authors, genres), author, genre)
    }

    #[tokio::test]
    async fn test_resolve_embeds_existing_references() {
        let (hydrator, author, genre) = seeded_hydrator().await;
        let book = Book::new("Dom Casmurro".to_string(), author.id, genre.id, None);

        let hydrated = hydrator.resolve(book.clone()).await.unwrap();

        assert_eq!(hydrated.author.as_ref().map(|a| a.id), Some(book.author_id));
        assert_eq!(hydrated.genre.as_ref().map(|g| g.id), Some(book.genre_id));
        assert_eq!(hydrated.author.unwrap().name, "Machado de Assis");
    }

    #[tokio::test]
    async fn test_resolve_tolerates_dangling_references() {
        let (hydrator, _, genre) = seeded_hydrator().await;
        // references an author that was never stored
        let book = Book::new("Órfão".to_string(), AuthorId::new(), genre.id, None);

        let hydrated = hydrator.resolve(book).await.unwrap();

        assert!(hydrated.author.is_none());
        assert!(hydrated.genre.is_some());
    }

    #[tokio::test]
    async fn test_resolve_tolerates_both_sides_dangling() {
        let (hydrator, _, _) = seeded_hydrator().await;
        let book = Book::new("Órfão".to_string(), AuthorId::new(), GenreId::new(), None);

        let hydrated = hydrator.resolve(book).await.unwrap();
        assert!(hydrated.author.is_none());
        assert!(hydrated.genre.is_none());
    }

    #[tokio::test]
    async fn test_resolve_many_preserves_order() {
        let (hydrator, author, genre) = seeded_hydrator().await;
        let first = Book::new("Primeiro".to_string(), author.id, genre.id, None);
        let second = Book::new("Segundo".to_string(), author.id, genre.id, None);

        let hydrated = hydrator
            .resolve_many(vec![first.clone(), second.clone()])
            .await
            .unwrap();

        assert_eq!(hydrated.len(), 2);
        assert_eq!(hydrated[0].id, first.id);
        assert_eq!(hydrated[1].id, second.id);
    }
}
