//! File upload handler.

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use bytes::Bytes;
use tracing::{info, warn};

use scanbench_core::error::AppError;
use scanbench_storage::secure_filename;

use crate::dto::response::UploadResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// Multipart field carrying the file.
const FILE_FIELD: &str = "file";

/// POST /upload
///
/// Checks run in order: a `file` part must exist, its filename must be
/// non-empty, and the original name's extension must be allowed. Only then
/// is the name sanitized and the content written, replacing any file of
/// the same sanitized name.
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<UploadResponse>> {
    let Ok(multipart) = multipart else {
        return Err(AppError::validation("No file part").into());
    };

    let (original_name, data) = read_file_part(multipart)
        .await?
        .ok_or_else(|| AppError::validation("No file part"))?;

    if original_name.is_empty() {
        return Err(AppError::validation("No selected file").into());
    }

    if !state.allow_list.permits(&original_name) {
        warn!(filename = %original_name, "Upload rejected: extension not allowed");
        return Err(AppError::validation("File type not allowed").into());
    }

    let sanitized = secure_filename(&original_name);
    if sanitized.is_empty() {
        warn!(filename = %original_name, "Upload rejected: name sanitizes to nothing");
        return Err(AppError::validation("Invalid filename").into());
    }

    let stored = state
        .upload_store
        .save(&original_name, &sanitized, data)
        .await?;

    info!(
        original = %stored.original_name,
        filename = %stored.sanitized_name,
        bytes = stored.size,
        "File uploaded"
    );

    Ok(Json(UploadResponse {
        message: "File uploaded".to_string(),
        path: stored.path.display().to_string(),
    }))
}

/// First `file` part that carries a filename, with its content.
///
/// A `file` part without a filename is a plain form value and is skipped.
async fn read_file_part(mut multipart: Multipart) -> Result<Option<(String, Bytes)>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };

        let data = field.bytes().await.map_err(malformed)?;
        return Ok(Some((file_name, data)));
    }

    Ok(None)
}

fn malformed(e: MultipartError) -> AppError {
    AppError::validation(format!("Malformed multipart body: {}", e.body_text()))
}
