use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::create_cors_layer;
use axum::Router;
use core_config::server::ServerConfig;
use std::io;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if the TCP listener fails to bind or the server
/// encounters an error during operation.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// Sets up:
/// - Swagger UI at `/swagger-ui` (document at `/api-docs/openapi.json`)
/// - API routes nested under `/api`
/// - Request tracing
/// - CORS restricted to a single origin, with credentials
/// - 404 fallback handler
///
/// Domain routers are expected to carry their own state; this function only
/// combines them with cross-cutting concerns. The document is taken by
/// value so callers can assemble it conditionally (e.g. environment-gated
/// routes).
///
/// # Errors
/// Returns an error if `allowed_origin` is not a valid header value.
pub fn create_router(
    apis: Router,
    openapi: utoipa::openapi::OpenApi,
    allowed_origin: &str,
) -> io::Result<Router> {
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = create_cors_layer(allowed_origin).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid CORS origin '{}': {}", allowed_origin, e),
        )
    })?;

    info!("CORS configured with allowed origin: {}", allowed_origin);

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer);

    Ok(router)
}
