//! Book-related DTOs.

use crate::dto::{AuthorResponse, GenreResponse};
use biblioteca_core::{rules, BookId, HydratedBook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new book.
///
/// Reference identifiers arrive as opaque strings; they are validated for
/// presence here and parsed by the service. The referenced documents are not
/// required to exist.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBookRequest {
    #[serde(rename = "titulo")]
    #[validate(custom(function = rules::not_blank, message = "Title is required"))]
    pub title: String,

    #[serde(rename = "autor_id")]
    #[validate(custom(function = rules::not_blank, message = "Author reference is required"))]
    pub author_id: String,

    #[serde(rename = "genero_id")]
    #[validate(custom(function = rules::not_blank, message = "Genre reference is required"))]
    pub genre_id: String,

    /// Publication date as `YYYY-MM-DD` or RFC 3339; normalized to midday UTC
    /// on write.
    #[serde(rename = "data_publicacao", default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
}

/// Request to update a book. All fields optional: absent fields keep their
/// stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookRequest {
    #[serde(rename = "titulo", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "autor_id", default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,

    #[serde(rename = "genero_id", default, skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<String>,

    #[serde(rename = "data_publicacao", default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
}

/// Hydrated book response: references resolved inline, `null` when dangling.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    pub id: BookId,

    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "autor")]
    pub author: Option<AuthorResponse>,

    #[serde(rename = "genero")]
    pub genre: Option<GenreResponse>,

    #[serde(rename = "data_publicacao", skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<DateTime<Utc>>,
}

impl From<HydratedBook> for BookResponse {
    fn from(book: HydratedBook) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author.map(AuthorResponse::from),
            genre: book.genre.map(GenreResponse::from),
            publication_date: book.publication_date,
        }
    }
}

/// Confirmation payload for a completed delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedBookResponse {
    pub id: BookId,

    #[serde(rename = "titulo")]
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblioteca_core::{Author, AuthorId, Book, Genre, GenreId, HydratedBook, ValidateExt};

    #[test]
    fn test_create_request_wire_names() {
        let json = r#"{
            "titulo": "Dom Casmurro",
            "autor_id": "550e8400-e29b-41d4-a716-446655440000",
            "genero_id": "550e8400-e29b-41d4-a716-446655440001",
            "data_publicacao": "1899-01-01"
        }"#;

        let request: CreateBookRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title, "Dom Casmurro");
        assert_eq!(request.publication_date.as_deref(), Some("1899-01-01"));
        assert!(request.validate_request().is_ok());
    }

    #[test]
    fn test_create_request_rejects_blank_fields() {
        let request = CreateBookRequest {
            title: "   ".to_string(),
            author_id: "a1".to_string(),
            genre_id: "g1".to_string(),
            publication_date: None,
        };
        assert!(request.validate_request().is_err());

        let request = CreateBookRequest {
            title: "T".to_string(),
            author_id: String::new(),
            genre_id: "g1".to_string(),
            publication_date: None,
        };
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_update_request_defaults_to_no_changes() {
        let request: UpdateBookRequest = serde_json::from_str("{}").unwrap();
        assert!(request.title.is_none());
        assert!(request.author_id.is_none());
        assert!(request.genre_id.is_none());
        assert!(request.publication_date.is_none());
    }

    #[test]
    fn test_book_response_serializes_dangling_refs_as_null() {
        let book = Book::new("Órfão".to_string(), AuthorId::new(), GenreId::new(), None);
        let response = BookResponse::from(HydratedBook::compose(book, None, None));

        let value = serde_json::to_value(&response).unwrap();
        assert!(value["autor"].is_null());
        assert!(value["genero"].is_null());
        assert_eq!(value["titulo"], "Órfão");
    }

    #[test]
    fn test_book_response_embeds_resolved_refs() {
        let author = Author::new("Machado de Assis".to_string());
        let genre = Genre::new("Romance".to_string());
        let book = Book::new("Dom Casmurro".to_string(), author.id, genre.id, None);

        let response =
            BookResponse::from(HydratedBook::compose(book, Some(author), Some(genre)));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["autor"]["nome"], "Machado de Assis");
        assert_eq!(value["genero"]["nome"], "Romance");
    }
}
