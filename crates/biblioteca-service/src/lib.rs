//! # Biblioteca Service
//!
//! Business logic layer for the library catalog: request/response DTOs, the
//! reference resolver that hydrates books, and the Author/Genre/Book
//! services.

pub mod author_service;
pub mod book_service;
pub mod dto;
pub mod genre_service;
pub mod hydrator;

pub use author_service::*;
pub use book_service::*;
pub use dto::*;
pub use genre_service::*;
pub use hydrator::*;
