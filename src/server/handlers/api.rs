//! JSON API handlers for the catalog.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::catalog::{CardFields, CardRecord, StoreChange};

use super::super::state::AppState;
use super::{read_upload, reject};

fn default_quantity() -> u32 {
    1
}

/// Request body for adding cards.
#[derive(Debug, Deserialize)]
pub struct AddRequest {
    #[serde(flatten)]
    pub fields: CardFields,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// GET /api/cards - List cards in catalog order.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<CardRecord>> {
    Json(state.catalog.lock().await.list())
}

/// POST /api/cards - Add `quantity` copies of a card.
pub async fn add(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddRequest>,
) -> Result<(StatusCode, Json<StoreChange>), (StatusCode, String)> {
    let change = state
        .catalog
        .lock()
        .await
        .add(req.fields, req.quantity)
        .map_err(reject)?;
    Ok((StatusCode::CREATED, Json(change)))
}

/// DELETE /api/cards/:id - Delete one card.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.catalog.lock().await.delete(&id).map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/cards/import - Import an uploaded delimited file.
pub async fn import(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<StoreChange>), (StatusCode, String)> {
    let bytes = read_upload(multipart).await?;
    let change = state.catalog.lock().await.import(&bytes).map_err(reject)?;
    Ok((StatusCode::CREATED, Json(change)))
}
