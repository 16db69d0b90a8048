//! Image upload and static serving.
//!
//! Accepted images are stored on disk under a unique name and served back at
//! `/uploads/{filename}`. The returned path is what clients put in a
//! product's `image` field.

use std::path::{Path, PathBuf};

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
};
use axum_helpers::AppError;
use serde::Serialize;
use tower_http::services::ServeDir;
use tracing::info;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Public path of the stored image, e.g. `/uploads/3f2a….jpg`
    pub image_url: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(upload_image),
    components(schemas(UploadResponse)),
    tags(
        (name = "Uploads", description = "Image upload endpoints")
    )
)]
pub struct ApiDoc;

/// Stores uploaded images on the local filesystem.
#[derive(Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Generate a collision-free name, keeping the original extension so the
    /// static file server picks the right content type. Names without an
    /// extension get a bare UUID.
    fn unique_filename(original: &str) -> String {
        match Path::new(original).extension().and_then(|ext| ext.to_str()) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        }
    }

    /// Write the bytes under a fresh name and return the public path.
    ///
    /// The upload directory is created on first use.
    async fn save(&self, original_name: &str, bytes: &[u8]) -> std::io::Result<String> {
        tokio::fs::create_dir_all(&self.root).await?;

        let stored = Self::unique_filename(original_name);
        tokio::fs::write(self.root.join(&stored), bytes).await?;

        Ok(format!("/uploads/{}", stored))
    }
}

fn is_image_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.starts_with("image/"))
}

/// Create the upload router, mounted under `/api`
pub fn router(state: &AppState) -> Router {
    upload_router(ImageStore::new(state.config.uploads.dir.clone()))
}

/// Uploads carry no size cap, so the extractor's default body limit is
/// lifted on this route.
fn upload_router(store: ImageStore) -> Router {
    Router::new()
        .route("/upload", post(upload_image))
        .layer(DefaultBodyLimit::disable())
        .with_state(store)
}

/// Serve stored images at `/uploads/{filename}`, mounted at the app root
pub fn static_router(upload_dir: &Path) -> Router {
    Router::new().nest_service("/uploads", ServeDir::new(upload_dir))
}

/// Upload a product image
#[utoipa::path(
    post,
    path = "/upload",
    tag = "Uploads",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = UploadResponse),
        (status = 400, description = "Missing file field or not an image"),
        (status = 500, description = "Filesystem failure")
    )
)]
async fn upload_image(
    State(store): State<ImageStore>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        if !is_image_content_type(field.content_type()) {
            return Err(AppError::BadRequest("File must be an image".to_string()));
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;

        let image_url = store.save(&original_name, &bytes).await?;

        info!(%image_url, size = bytes.len(), "Image uploaded");
        return Ok(Json(UploadResponse { image_url }));
    }

    Err(AppError::BadRequest("Missing 'file' field".to_string()))
}
