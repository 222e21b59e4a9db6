//! Author controller.

use crate::{
    extractors::ApiJson,
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use biblioteca_core::{AuthorId, BibliotecaError};
use biblioteca_service::{AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest};
use tracing::debug;

/// Creates the author router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_authors).post(create_author))
        .route(
            "/:id",
            get(get_author).put(update_author).delete(delete_author),
        )
}

/// Create a new author.
#[utoipa::path(
    post,
    path = "/api/autores",
    tag = "autores",
    request_body = CreateAuthorRequest,
    responses(
        (status = 201, description = "Author created", body = AuthorResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateAuthorRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthorResponse>>), AppError> {
    debug!("Create author request: {}", request.name);

    let response = state.author_service.create_author(request).await?;
    Ok(created("Autor criado com sucesso", response))
}

/// List all authors.
#[utoipa::path(
    get,
    path = "/api/autores",
    tag = "autores",
    responses((status = 200, description = "Authors listed", body = [AuthorResponse]))
)]
pub async fn list_authors(State(state): State<AppState>) -> ApiResult<Vec<AuthorResponse>> {
    debug!("List authors request");

    let authors = state.author_service.list_authors().await?;
    Ok(Json(ApiResponse::list(authors)))
}

/// Get an author by ID.
#[utoipa::path(
    get,
    path = "/api/autores/{id}",
    tag = "autores",
    params(("id" = String, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author found", body = AuthorResponse),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<AuthorResponse> {
    debug!("Get author request: {}", id);

    let author_id = parse_author_id(&id)?;
    let response = state.author_service.get_author(author_id).await?;
    ok(response)
}

/// Update an author.
#[utoipa::path(
    put,
    path = "/api/autores/{id}",
    tag = "autores",
    params(("id" = String, Path, description = "Author ID")),
    request_body = UpdateAuthorRequest,
    responses(
        (status = 200, description = "Author updated", body = AuthorResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateAuthorRequest>,
) -> ApiResult<AuthorResponse> {
    debug!("Update author request: {}", id);

    let author_id = parse_author_id(&id)?;
    let response = state.author_service.update_author(author_id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Autor atualizado com sucesso",
        response,
    )))
}

/// Delete an author.
#[utoipa::path(
    delete,
    path = "/api/autores/{id}",
    tag = "autores",
    params(("id" = String, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author deleted"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    debug!("Delete author request: {}", id);

    let author_id = parse_author_id(&id)?;
    state.author_service.delete_author(author_id).await?;
    Ok(Json(ApiResponse::message_only("Autor deletado com sucesso")))
}

/// Helper to parse an author ID from a path parameter.
fn parse_author_id(id: &str) -> Result<AuthorId, AppError> {
    AuthorId::parse(id)
        .map_err(|_| AppError(BibliotecaError::Validation(format!("Invalid author ID: {}", id))))
}
