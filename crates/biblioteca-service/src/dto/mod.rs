//! Request and response DTOs.
//!
//! Wire field names follow the API contract (`titulo`, `autor_id`,
//! `genero_id`, `data_publicacao`, `nome`); Rust fields keep domain naming
//! and map with `#[serde(rename)]`.

pub mod author_dto;
pub mod book_dto;
pub mod genre_dto;

pub use author_dto::*;
pub use book_dto::*;
pub use genre_dto::*;
