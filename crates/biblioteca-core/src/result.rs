//! Result type aliases for Biblioteca.

use crate::BibliotecaError;

/// A specialized `Result` type for Biblioteca operations.
pub type BibliotecaResult<T> = Result<T, BibliotecaError>;
