//! CORS layer configuration.

use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

/// Create a CORS layer permitting exactly one origin with credentials.
///
/// Methods and headers mirror whatever the preflight request asks for
/// (a wildcard is not allowed alongside credentials, so mirroring is the
/// way to leave them unrestricted).
///
/// # Example
/// ```ignore
/// use axum_helpers::http::create_cors_layer;
///
/// let cors = create_cors_layer("http://localhost:3000")?;
/// let app = Router::new().layer(cors);
/// ```
pub fn create_cors_layer(allowed_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin: HeaderValue = allowed_origin.parse()?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}
