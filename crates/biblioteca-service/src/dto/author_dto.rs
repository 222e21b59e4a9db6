//! Author-related DTOs.

use biblioteca_core::{rules, Author, AuthorId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new author.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAuthorRequest {
    #[serde(rename = "nome")]
    #[validate(custom(function = rules::not_blank, message = "Name is required"))]
    pub name: String,
}

/// Request to update an author. The entity has a single mutable field, so a
/// partial update and a full replacement are the same operation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAuthorRequest {
    #[serde(rename = "nome")]
    #[validate(custom(function = rules::not_blank, message = "Name is required"))]
    pub name: String,
}

/// Author response DTO.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorResponse {
    pub id: AuthorId,

    #[serde(rename = "nome")]
    pub name: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblioteca_core::ValidateExt;

    #[test]
    fn test_create_author_request_validation() {
        let ok = CreateAuthorRequest { name: "Machado de Assis".to_string() };
        assert!(ok.validate_request().is_ok());

        let blank = CreateAuthorRequest { name: "  ".to_string() };
        assert!(blank.validate_request().is_err());
    }

    #[test]
    fn test_author_response_wire_names() {
        let author = Author::new("Machado de Assis".to_string());
        let value = serde_json::to_value(AuthorResponse::from(author)).unwrap();
        assert_eq!(value["nome"], "Machado de Assis");
        assert!(value["id"].is_string());
    }
}
