//! HTTP handlers for the server.

pub mod api;
pub mod cards;
pub mod export;

use axum::extract::Multipart;
use axum::http::StatusCode;
use tracing::warn;

use crate::error::LabelError;

/// Map a catalog error to a status and message.
pub(crate) fn reject(err: LabelError) -> (StatusCode, String) {
    let status = match err {
        LabelError::Parse(_) | LabelError::InvalidQuantity(_) => StatusCode::BAD_REQUEST,
        LabelError::CardNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!(status = status.as_u16(), error = %err, "request rejected");
    (status, err.to_string())
}

/// Read the uploaded `file` field from a multipart body.
pub(crate) async fn read_upload(mut multipart: Multipart) -> Result<Vec<u8>, (StatusCode, String)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Multipart error: {}", e)))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read file: {}", e)))?;
            return Ok(bytes.to_vec());
        }
    }

    Err((StatusCode::BAD_REQUEST, "No file field found".to_string()))
}
