//! JSON body extractor with enveloped rejections.
//!
//! axum's bare `Json<T>` answers malformed or incomplete bodies with a
//! plain-text 422 before the handler runs. Every body on this API must fail
//! as a 400 inside the `{sucesso, mensagem}` envelope instead, so handlers
//! take `ApiJson<T>` and the rejection is funneled through [`AppError`].

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use biblioteca_core::BibliotecaError;
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection is an enveloped validation error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T> std::ops::Deref for ApiJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject)?;
        Ok(Self(value))
    }
}

fn reject(rejection: JsonRejection) -> AppError {
    AppError(BibliotecaError::Validation(format!(
        "Invalid request body: {}",
        rejection.body_text()
    )))
}
