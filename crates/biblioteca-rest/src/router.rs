//! Main application router.

use crate::{
    controllers::{autores_controller, generos_controller, health_controller, livros_controller},
    openapi::ApiDoc,
    state::AppState,
};
use axum::Router;
use biblioteca_config::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let api_router = Router::new()
        .nest("/livros", livros_controller::router())
        .nest("/autores", autores_controller::router())
        .nest("/generos", generos_controller::router())
        .with_state(state);

    let router = Router::new()
        // Greeting and health endpoints
        .merge(health_controller::router())
        // Catalog API
        .nest("/api", api_router)
        // Swagger UI and OpenAPI spec
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware layers
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    info!("Router created with REST endpoints and Swagger UI at /swagger-ui");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}
