//! Book query service.
//!
//! Orchestrates the entity store, the reference resolver, and the
//! publication-date normalizer into the six catalog operations.

use crate::dto::{BookResponse, CreateBookRequest, DeletedBookResponse, UpdateBookRequest};
use crate::hydrator::BookHydrator;
use async_trait::async_trait;
use biblioteca_core::{
    parse_publication_date, rules, AuthorId, BibliotecaError, BibliotecaResult, Book, BookId,
    GenreId, ValidateExt,
};
use biblioteca_repository::BookRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Book service trait.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Creates a new book and returns it hydrated.
    async fn create_book(&self, request: CreateBookRequest) -> BibliotecaResult<BookResponse>;

    /// Lists all books, hydrated, in the store's natural order.
    async fn list_books(&self) -> BibliotecaResult<Vec<BookResponse>>;

    /// Gets a book by ID. Fails with `NotFound` when absent.
    async fn get_book(&self, id: BookId) -> BibliotecaResult<BookResponse>;

    /// Finds books whose title contains `substring`, case-insensitively.
    ///
    /// Fails soft: zero matches yield an empty list, never `NotFound`.
    /// Search absence and lookup absence are distinct outcomes; only the
    /// boundary layer may choose to present an empty search as 404.
    async fn search_books_by_title(&self, substring: &str) -> BibliotecaResult<Vec<BookResponse>>;

    /// Applies a partial update and returns the hydrated result.
    async fn update_book(
        &self,
        id: BookId,
        request: UpdateBookRequest,
    ) -> BibliotecaResult<BookResponse>;

    /// Deletes a book, returning the removed record's identity.
    async fn delete_book(&self, id: BookId) -> BibliotecaResult<DeletedBookResponse>;
}

/// Book service implementation over the entity store and hydrator.
pub struct BookServiceImpl {
    books: Arc<dyn BookRepository>,
    hydrator: BookHydrator,
}

impl BookServiceImpl {
    /// Creates a new book service.
    pub fn new(books: Arc<dyn BookRepository>, hydrator: BookHydrator) -> Self {
        Self { books, hydrator }
    }

    fn parse_author_ref(raw: &str) -> BibliotecaResult<AuthorId> {
        AuthorId::parse(raw.trim())
            .map_err(|_| BibliotecaError::validation(format!("Invalid author reference: {}", raw)))
    }

    fn parse_genre_ref(raw: &str) -> BibliotecaResult<GenreId> {
        GenreId::parse(raw.trim())
            .map_err(|_| BibliotecaError::validation(format!("Invalid genre reference: {}", raw)))
    }
}

#[async_trait]
impl BookService for BookServiceImpl {
    async fn create_book(&self, request: CreateBookRequest) -> BibliotecaResult<BookResponse> {
        debug!("Creating book: {}", request.title);

        request.validate_request()?;

        let author_id = Self::parse_author_ref(&request.author_id)?;
        let genre_id = Self::parse_genre_ref(&request.genre_id)?;

        // The referenced documents are not verified to exist; referential
        // soundness is best-effort by design.
        let publication_date = request
            .publication_date
            .as_deref()
            .map(parse_publication_date)
            .transpose()?;

        let book = Book::new(request.title, author_id, genre_id, publication_date);
        let saved = self.books.save(&book).await?;

        info!("Book created: {}", saved.id);
        Ok(self.hydrator.resolve(saved).await?.into())
    }

    async fn list_books(&self) -> BibliotecaResult<Vec<BookResponse>> {
        debug!("Listing all books");

        let books = self.books.find_all().await?;
        let hydrated = self.hydrator.resolve_many(books).await?;
        Ok(hydrated.into_iter().map(BookResponse::from).collect())
    }

    async fn get_book(&self, id: BookId) -> BibliotecaResult<BookResponse> {
        debug!("Getting book: {}", id);

        let book = self
            .books
            .find_by_id(id)
            .await?
            .ok_or_else(|| BibliotecaError::not_found("Livro", id))?;

        Ok(self.hydrator.resolve(book).await?.into())
    }

    async fn search_books_by_title(&self, substring: &str) -> BibliotecaResult<Vec<BookResponse>> {
        debug!("Searching books by title: '{}'", substring);

        let books = self.books.find_by_title_contains(substring).await?;
        let hydrated = self.hydrator.resolve_many(books).await?;
        Ok(hydrated.into_iter().map(BookResponse::from).collect())
    }

    async fn update_book(
        &self,
        id: BookId,
        request: UpdateBookRequest,
    ) -> BibliotecaResult<BookResponse> {
        debug!("Updating book: {}", id);

        let mut book = self
            .books
            .find_by_id(id)
            .await?
            .ok_or_else(|| BibliotecaError::not_found("Livro", id))?;

        if let Some(title) = request.title {
            book.title = title;
        }
        if let Some(author_ref) = request.author_id {
            book.author_id = Self::parse_author_ref(&author_ref)?;
        }
        if let Some(genre_ref) = request.genre_id {
            book.genre_id = Self::parse_genre_ref(&genre_ref)?;
        }
        if let Some(raw_date) = request.publication_date {
            book.publication_date = Some(parse_publication_date(&raw_date)?);
        }

        // merged result is validated the same as create
        if rules::not_blank(&book.title).is_err() {
            return Err(BibliotecaError::validation("Title is required"));
        }

        let updated = self
            .books
            .update(&book)
            .await?
            .ok_or_else(|| BibliotecaError::not_found("Livro", id))?;

        info!("Book updated: {}", id);
        Ok(self.hydrator.resolve(updated).await?.into())
    }

    async fn delete_book(&self, id: BookId) -> BibliotecaResult<DeletedBookResponse> {
        debug!("Deleting book: {}", id);

        let book = self
            .books
            .find_by_id(id)
            .await?
            .ok_or_else(|| BibliotecaError::not_found("Livro", id))?;

        let deleted = self.books.delete(id).await?;
        if !deleted {
            return Err(BibliotecaError::not_found("Livro", id));
        }

        info!("Book deleted: {}", id);
        Ok(DeletedBookResponse {
            id: book.id,
            title: book.title,
        })
    }
}

impl std::fmt::Debug for BookServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookServiceImpl").finish_non_exhaustive()
    }
}
