//! Book catalog controller.

use crate::{
    extractors::ApiJson,
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use biblioteca_core::{BibliotecaError, BookId};
use biblioteca_service::{BookResponse, CreateBookRequest, DeletedBookResponse, UpdateBookRequest};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

/// Creates the book router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/:id", get(get_book).put(update_book).delete(delete_book))
}

/// Query parameters for the book listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListBooksQuery {
    /// Optional title substring; switches the listing into search mode.
    pub titulo: Option<String>,
}

/// Create a new book.
#[utoipa::path(
    post,
    path = "/api/livros",
    tag = "livros",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateBookRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookResponse>>), AppError> {
    debug!("Create book request: {}", request.title);

    let response = state.book_service.create_book(request).await?;
    Ok(created("Livro criado com sucesso!", response))
}

/// List all books, or search by title substring.
///
/// Boundary policy, kept from the observed behavior: a search (`?titulo=`)
/// with zero matches answers 404, while a plain listing of an empty catalog
/// answers 200 with an empty array. The service itself never treats an empty
/// search as an error.
#[utoipa::path(
    get,
    path = "/api/livros",
    tag = "livros",
    params(ListBooksQuery),
    responses(
        (status = 200, description = "Books listed", body = [BookResponse]),
        (status = 404, description = "Title search matched nothing")
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> Result<Response, AppError> {
    let search = query.titulo.as_deref().map(str::trim).filter(|t| !t.is_empty());

    let books = match search {
        Some(substring) => {
            debug!("Search books request: '{}'", substring);
            let matches = state.book_service.search_books_by_title(substring).await?;
            if matches.is_empty() {
                let body = ApiResponse::<()>::failure(format!(
                    "Nenhum livro encontrado com o título que contenha '{}'.",
                    substring
                ));
                return Ok((StatusCode::NOT_FOUND, Json(body)).into_response());
            }
            matches
        }
        None => {
            debug!("List books request");
            state.book_service.list_books().await?
        }
    };

    Ok(Json(ApiResponse::list(books)).into_response())
}

/// Get a book by ID.
#[utoipa::path(
    get,
    path = "/api/livros/{id}",
    tag = "livros",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book found", body = BookResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<BookResponse> {
    debug!("Get book request: {}", id);

    let book_id = parse_book_id(&id)?;
    let response = state.book_service.get_book(book_id).await?;
    ok(response)
}

/// Update a book (partial or full).
#[utoipa::path(
    put,
    path = "/api/livros/{id}",
    tag = "livros",
    params(("id" = String, Path, description = "Book ID")),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateBookRequest>,
) -> ApiResult<BookResponse> {
    debug!("Update book request: {}", id);

    let book_id = parse_book_id(&id)?;
    let response = state.book_service.update_book(book_id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Livro atualizado com sucesso",
        response,
    )))
}

/// Delete a book.
#[utoipa::path(
    delete,
    path = "/api/livros/{id}",
    tag = "livros",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = DeletedBookResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<DeletedBookResponse> {
    debug!("Delete book request: {}", id);

    let book_id = parse_book_id(&id)?;
    let response = state.book_service.delete_book(book_id).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Livro deletado com sucesso",
        response,
    )))
}

/// Helper to parse a book ID from a path parameter.
fn parse_book_id(id: &str) -> Result<BookId, AppError> {
    BookId::parse(id)
        .map_err(|_| AppError(BibliotecaError::Validation(format!("Invalid book ID: {}", id))))
}
