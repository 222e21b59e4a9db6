//! OpenAPI documentation configuration.
//!
//! Generates the Swagger document served under `/swagger-ui`.

use biblioteca_core::{AuthorId, BookId, GenreId};
use biblioteca_service::{
    AuthorResponse, BookResponse, CreateAuthorRequest, CreateBookRequest, CreateGenreRequest,
    DeletedBookResponse, GenreResponse, UpdateAuthorRequest, UpdateBookRequest,
    UpdateGenreRequest,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Biblioteca API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "1.0.0",
        description = "RESTful API for a library catalog: books, authors and genres",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Book endpoints
        crate::controllers::livros_controller::create_book,
        crate::controllers::livros_controller::list_books,
        crate::controllers::livros_controller::get_book,
        crate::controllers::livros_controller::update_book,
        crate::controllers::livros_controller::delete_book,
        // Author endpoints
        crate::controllers::autores_controller::create_author,
        crate::controllers::autores_controller::list_authors,
        crate::controllers::autores_controller::get_author,
        crate::controllers::autores_controller::update_author,
        crate::controllers::autores_controller::delete_author,
        // Genre endpoints
        crate::controllers::generos_controller::create_genre,
        crate::controllers::generos_controller::list_genres,
        crate::controllers::generos_controller::get_genre,
        crate::controllers::generos_controller::update_genre,
        crate::controllers::generos_controller::delete_genre,
        // Health endpoints
        crate::controllers::health_controller::greeting,
        crate::controllers::health_controller::health_check,
    ),
    components(
        schemas(
            // Core types
            BookId,
            AuthorId,
            GenreId,
            // Book DTOs
            CreateBookRequest,
            UpdateBookRequest,
            BookResponse,
            DeletedBookResponse,
            // Author DTOs
            CreateAuthorRequest,
            UpdateAuthorRequest,
            AuthorResponse,
            // Genre DTOs
            CreateGenreRequest,
            UpdateGenreRequest,
            GenreResponse,
        )
    ),
    tags(
        (name = "livros", description = "Book catalog endpoints"),
        (name = "autores", description = "Author management endpoints"),
        (name = "generos", description = "Genre management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_doc_generation() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().unwrap();
        assert!(json.contains("Biblioteca API"));
        assert!(json.contains("/api/livros"));
        assert!(json.contains("/api/autores"));
        assert!(json.contains("/api/generos"));
    }
}
