//! In-memory document store.
//!
//! Plays the role of the document database: one [`Collection`] per entity
//! type, point operations only. Suitable for tests and single-process
//! deployments; a driver-backed store can replace it behind the same traits.

mod author_repository;
mod book_repository;
mod collection;
mod genre_repository;

pub use author_repository::MemoryAuthorRepository;
pub use book_repository::MemoryBookRepository;
pub use collection::Collection;
pub use genre_repository::MemoryGenreRepository;
