//! Storage handlers
//!
//! Object-storage stand-in: authenticated multipart upload returning a public
//! URL, and the matching public download route.

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use shared::client::UploadResponse;
use shared::{ApiError, ApiResponse, ApiResult};

use super::ok;
use crate::auth::CurrentUser;
use crate::state::AppState;

/// Maximum file size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Upload an image, returning its public URL
pub async fn upload(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> ApiResult<Json<ApiResponse<UploadResponse>>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::invalid(format!("Failed to read upload: {}", e)))?;

        if data.len() > MAX_FILE_SIZE {
            return Err(ApiError::validation(format!(
                "File too large. Maximum size is {}MB",
                MAX_FILE_SIZE / 1024 / 1024
            )));
        }

        let ext = std::path::Path::new(&original_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
            return Err(ApiError::validation(format!(
                "Unsupported file format '{}'. Supported: {}",
                ext,
                SUPPORTED_FORMATS.join(", ")
            )));
        }

        let filename = format!("{}.{}", Uuid::new_v4(), ext);
        let size = data.len();
        state.uploads.insert(filename.clone(), data.to_vec());

        let url = format!(
            "{}/storage/files/{}",
            state.config.public_base_url.trim_end_matches('/'),
            filename
        );

        tracing::info!(user_id = user.user_id, %filename, size, "Image uploaded");
        return Ok(ok(UploadResponse {
            filename,
            size,
            url,
        }));
    }

    Err(ApiError::validation("Missing 'file' field"))
}

/// Serve an uploaded file (public)
pub async fn get_file(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let data = state
        .uploads
        .get(&name)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| ApiError::not_found("File"))?;

    let content_type = match name.rsplit('.').next() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    };

    Ok(([(header::CONTENT_TYPE, content_type)], data))
}
