//! # Biblioteca REST
//!
//! Axum REST layer: controllers, router, the `{sucesso, mensagem, dados,
//! quantidade}` response envelope, and application state.

pub mod controllers;
pub mod extractors;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use extractors::ApiJson;
pub use responses::*;
pub use router::create_router;
pub use state::AppState;
