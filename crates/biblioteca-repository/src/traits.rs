//! Repository trait definitions.

use async_trait::async_trait;
use biblioteca_core::{Author, AuthorId, BibliotecaResult, Book, BookId, Genre, GenreId};

/// Author repository trait.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Finds an author by ID.
    async fn find_by_id(&self, id: AuthorId) -> BibliotecaResult<Option<Author>>;

    /// Finds all authors, in the store's natural order.
    async fn find_all(&self) -> BibliotecaResult<Vec<Author>>;

    /// Saves a new author.
    async fn save(&self, author: &Author) -> BibliotecaResult<Author>;

    /// Updates an existing author. Returns `None` when the ID does not exist.
    async fn update(&self, author: &Author) -> BibliotecaResult<Option<Author>>;

    /// Deletes an author by ID. Returns `false` when the ID did not exist.
    async fn delete(&self, id: AuthorId) -> BibliotecaResult<bool>;

    /// Counts all authors.
    async fn count(&self) -> BibliotecaResult<u64>;
}

/// Genre repository trait.
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Finds a genre by ID.
    async fn find_by_id(&self, id: GenreId) -> BibliotecaResult<Option<Genre>>;

    /// Finds all genres, in the store's natural order.
    async fn find_all(&self) -> BibliotecaResult<Vec<Genre>>;

    /// Saves a new genre.
    async fn save(&self, genre: &Genre) -> BibliotecaResult<Genre>;

    /// Updates an existing genre. Returns `None` when the ID does not exist.
    async fn update(&self, genre: &Genre) -> BibliotecaResult<Option<Genre>>;

    /// Deletes a genre by ID. Returns `false` when the ID did not exist.
    async fn delete(&self, id: GenreId) -> BibliotecaResult<bool>;

    /// Counts all genres.
    async fn count(&self) -> BibliotecaResult<u64>;
}

/// Book repository trait.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Finds a book by ID.
    async fn find_by_id(&self, id: BookId) -> BibliotecaResult<Option<Book>>;

    /// Finds all books, in the store's natural order.
    async fn find_all(&self) -> BibliotecaResult<Vec<Book>>;

    /// Finds books whose title contains the given substring,
    /// case-insensitively and unanchored.
    async fn find_by_title_contains(&self, substring: &str) -> BibliotecaResult<Vec<Book>>;

    /// Saves a new book.
    async fn save(&self, book: &Book) -> BibliotecaResult<Book>;

    /// Updates an existing book. Returns `None` when the ID does not exist.
    async fn update(&self, book: &Book) -> BibliotecaResult<Option<Book>>;

    /// Deletes a book by ID. Returns `false` when the ID did not exist.
    async fn delete(&self, id: BookId) -> BibliotecaResult<bool>;

    /// Counts all books.
    async fn count(&self) -> BibliotecaResult<u64>;
}
