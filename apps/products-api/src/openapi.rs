//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::config::Environment;

/// Combined OpenAPI documentation for all always-mounted APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Organic Products API",
        version = "0.1.0",
        description = "REST API for managing organic products with image uploads",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api", api = crate::api::uploads::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product management endpoints"),
        (name = "Uploads", description = "Image upload endpoints")
    )
)]
pub struct ApiDoc;

/// Build the served document; the seed endpoint is only documented where it
/// is actually mounted.
pub fn api_doc(environment: &Environment) -> utoipa::openapi::OpenApi {
    let doc = ApiDoc::openapi();

    if environment.is_development() {
        doc.nest("/api", crate::api::seed::ApiDoc::openapi())
    } else {
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_endpoint_documented_only_in_development() {
        let dev = api_doc(&Environment::Development);
        assert!(dev.paths.paths.contains_key("/api/seed-data"));

        let prod = api_doc(&Environment::Production);
        assert!(!prod.paths.paths.contains_key("/api/seed-data"));
        assert!(prod.paths.paths.contains_key("/api/upload"));
    }
}
