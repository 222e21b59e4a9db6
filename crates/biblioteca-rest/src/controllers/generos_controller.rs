//! Genre controller.

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
use biblioteca_core::{BibliotecaError, GenreId};
use biblioteca_service::{CreateGenreRequest, GenreResponse, UpdateGenreRequest};
use tracing::debug;

/// Creates the genre router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_genres).post(create_genre))
        .route(
            "/:id",
            get(get_genre).put(update_genre).delete(delete_genre),
        )
}

/// Create a new genre.
#[utoipa::path(
    post,
    path = "/api/generos",
    tag = "generos",
    request_body = CreateGenreRequest,
    responses(
        (status = 201, description = "Genre created", body = GenreResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_genre(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateGenreRequest>,
) -> Result<(StatusCode, Json<ApiResponse<GenreResponse>>), AppError> {
    debug!("Create genre request: {}", request.name);

    let response = state.genre_service.create_genre(request).await?;
    Ok(created("Genero criado com sucesso!", response))
}

/// List all genres.
#[utoipa::path(
    get,
    path = "/api/generos",
    tag = "generos",
    responses((status = 200, description = "Genres listed", body = [GenreResponse]))
)]
pub async fn list_genres(State(state): State<AppState>) -> ApiResult<Vec<GenreResponse>> {
    debug!("List genres request");

    let genres = state.genre_service.list_genres().await?;
    Ok(Json(ApiResponse::list(genres)))
}

/// Get a genre by ID.
#[utoipa::path(
    get,
    path = "/api/generos/{id}",
    tag = "generos",
    params(("id" = String, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre found", body = GenreResponse),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<GenreResponse> {
    debug!("Get genre request: {}", id);

    let genre_id = parse_genre_id(&id)?;
    let response = state.genre_service.get_genre(genre_id).await?;
    ok(response)
}

/// Update a genre.
#[utoipa::path(
    put,
    path = "/api/generos/{id}",
    tag = "generos",
    params(("id" = String, Path, description = "Genre ID")),
    request_body = UpdateGenreRequest,
    responses(
        (status = 200, description = "Genre updated", body = GenreResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateGenreRequest>,
) -> ApiResult<GenreResponse> {
    debug!("Update genre request: {}", id);

    let genre_id = parse_genre_id(&id)?;
    let response = state.genre_service.update_genre(genre_id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Genero atualizado com sucesso",
        response,
    )))
}

/// Delete a genre.
#[utoipa::path(
    delete,
    path = "/api/generos/{id}",
    tag = "generos",
    params(("id" = String, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre deleted"),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    debug!("Delete genre request: {}", id);

    let genre_id = parse_genre_id(&id)?;
    state.genre_service.delete_genre(genre_id).await?;
    Ok(Json(ApiResponse::message_only("Genero deletado com sucesso")))
}

/// Helper to parse a genre ID from a path parameter.
fn parse_genre_id(id: &str) -> Result<GenreId, AppError> {
    GenreId::parse(id)
        .map_err(|_| AppError(BibliotecaError::Validation(format!("Invalid genre ID: {}", id))))
}
