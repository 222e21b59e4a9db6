//! Book entity and its hydrated projection.

use crate::{Author, AuthorId, BookId, Genre, GenreId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A book document as stored: references are raw identifiers.
///
/// `author_id` and `genre_id` are required at creation but the referenced
/// documents are never verified to exist at write time; referential soundness
/// is best-effort. Reads resolve the references and tolerate dangling ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier.
    pub id: BookId,

    /// Book title. Required, non-empty.
    pub title: String,

    /// Reference to the author document.
    pub author_id: AuthorId,

    /// Reference to the genre document.
    pub genre_id: GenreId,

    /// Publication date, stored at midday UTC of the calendar day.
    pub publication_date: Option<DateTime<Utc>>,
}

impl Book {
    /// Creates a new book with a fresh ID.
    #[must_use]
    pub fn new(
        title: String,
        author_id: AuthorId,
        genre_id: GenreId,
        publication_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: BookId::new(),
            title,
            author_id,
            genre_id,
            publication_date,
        }
    }
}

/// A book with its references resolved inline.
///
/// `author`/`genre` are `None` when the stored reference dangles (the
/// referenced document was deleted out of band). Callers render the missing
/// side as "unknown" rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydratedBook {
    /// Unique identifier.
    pub id: BookId,

    /// Book title.
    pub title: String,

    /// The resolved author, or `None` for a dangling reference.
    pub author: Option<Author>,

    /// The resolved genre, or `None` for a dangling reference.
    pub genre: Option<Genre>,

    /// Publication date at midday UTC.
    pub publication_date: Option<DateTime<Utc>>,
}

impl HydratedBook {
    /// Composes a hydrated book from a stored record and its resolved
    /// references.
    #[must_use]
    pub fn compose(book: Book, author: Option<Author>, genre: Option<Genre>) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author,
            genre,
            publication_date: book.publication_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_keeps_references() {
        let author_id = AuthorId::new();
        let genre_id = GenreId::new();
        let book = Book::new("Dom Casmurro".to_string(), author_id, genre_id, None);

        assert_eq!(book.author_id, author_id);
        assert_eq!(book.genre_id, genre_id);
        assert!(book.publication_date.is_none());
    }

    #[test]
    fn test_compose_preserves_identity() {
        let author = Author::new("Machado de Assis".to_string());
        let genre = Genre::new("Romance".to_string());
        let book = Book::new("Dom Casmurro".to_string(), author.id, genre.id, None);
        let book_id = book.id;

        let hydrated = HydratedBook::compose(book, Some(author.clone()), Some(genre.clone()));

        assert_eq!(hydrated.id, book_id);
        assert_eq!(hydrated.author, Some(author));
        assert_eq!(hydrated.genre, Some(genre));
    }

    #[test]
    fn test_compose_tolerates_missing_references() {
        let book = Book::new("Órfão".to_string(), AuthorId::new(), GenreId::new(), None);
        let hydrated = HydratedBook::compose(book, None, None);

        assert!(hydrated.author.is_none());
        assert!(hydrated.genre.is_none());
    }
}
