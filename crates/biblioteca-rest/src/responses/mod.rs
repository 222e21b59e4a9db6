//! API response types.
//!
//! Every endpoint answers with the same envelope:
//! `{ sucesso, mensagem?, dados?, quantidade? }`. The envelope lives only in
//! this layer; services return plain values or typed failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use biblioteca_core::BibliotecaError;
use serde::{Deserialize, Serialize};

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(rename = "sucesso")]
    pub success: bool,

    #[serde(rename = "mensagem", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(rename = "dados", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(rename = "quantidade", skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            count: None,
        }
    }

    /// Creates a successful response carrying `data` and a message.
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            count: None,
        }
    }

    /// Creates a successful response with a message only.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            count: None,
        }
    }

    /// Creates a failure response with a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            count: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Creates a successful list response with `quantidade` set.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            count: Some(items.len()),
            data: Some(items),
        }
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub BibliotecaError);

impl From<BibliotecaError> for AppError {
    fn from(err: BibliotecaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(ApiResponse::<()>::failure(self.0.to_string()));
        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

/// Helper to create a created (201) response with a message.
pub fn created<T: Serialize>(
    message: impl Into<String>,
    data: T,
) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(message, data)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success_with_message("Livro criado com sucesso!", 42);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["sucesso"], true);
        assert_eq!(value["mensagem"], "Livro criado com sucesso!");
        assert_eq!(value["dados"], 42);
        assert!(value.get("quantidade").is_none());
    }

    #[test]
    fn test_list_envelope_sets_quantidade() {
        let response = ApiResponse::list(vec!["a", "b"]);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["sucesso"], true);
        assert_eq!(value["quantidade"], 2);
        assert_eq!(value["dados"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_failure_envelope_shape() {
        let response = ApiResponse::<()>::failure("Livro não encontrado");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["sucesso"], false);
        assert_eq!(value["mensagem"], "Livro não encontrado");
        assert!(value.get("dados").is_none());
    }
}
