//! Genre-related DTOs.

use biblioteca_core::{rules, Genre, GenreId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new genre.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGenreRequest {
    #[serde(rename = "nome")]
    #[validate(custom(function = rules::not_blank, message = "Name is required"))]
    pub name: String,
}

/// Request to update a genre.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateGenreRequest {
    #[serde(rename = "nome")]
    #[validate(custom(function = rules::not_blank, message = "Name is required"))]
    pub name: String,
}

/// Genre response DTO.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenreResponse {
    pub id: GenreId,

    #[serde(rename = "nome")]
    pub name: String,
}

impl From<Genre> for GenreResponse {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblioteca_core::ValidateExt;

    #[test]
    fn test_create_genre_request_validation() {
        let ok = CreateGenreRequest { name: "Romance".to_string() };
        assert!(ok.validate_request().is_ok());

        let blank = CreateGenreRequest { name: String::new() };
        assert!(blank.validate_request().is_err());
    }
}
