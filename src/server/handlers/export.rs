//! Download handlers.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::info;

use crate::preview;
use crate::sheet;

use super::super::state::AppState;
use super::reject;

/// GET /cards.pdf - Label sheet PDF.
///
/// The snapshot is taken under the lock; composition runs after it is
/// released, so edits made meanwhile do not affect this document.
pub async fn pdf(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (snapshot, logo) = {
        let catalog = state.catalog.lock().await;
        (catalog.snapshot(), catalog.logo())
    };
    info!(cards = snapshot.len(), logo = %state.config.logo, "exporting label sheet");

    let bytes = tokio::task::spawn_blocking(move || sheet::compose(snapshot.records(), &logo))
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Processing error: {}", e),
            )
        })?
        .map_err(reject)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"cards.pdf\""),
        ],
        bytes,
    ))
}

/// GET /cards.html - Standalone HTML snapshot of the catalog.
pub async fn html(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.catalog.lock().await.snapshot();
    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"cards.html\""),
        ],
        preview::snapshot_document(snapshot.records()),
    )
}
