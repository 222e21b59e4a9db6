//! Domain entities for the library catalog.

pub mod author;
pub mod book;
pub mod genre;

pub use author::*;
pub use book::*;
pub use genre::*;
