//! Form page handlers.
//!
//! These back the plain-HTML page at `/`: each form posts here and is
//! redirected back on success. Failures re-render the page with the error
//! shown and an error status.

use axum::{
    Form,
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::catalog::CardFields;
use crate::error::LabelError;

use super::super::page;
use super::super::state::AppState;
use super::{read_upload, reject};

fn default_quantity() -> u32 {
    1
}

/// Form data for adding cards.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    #[serde(flatten)]
    pub fields: CardFields,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Form data for deleting a card.
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub id: String,
}

/// GET / - Form page with preview.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let snapshot = state.catalog.lock().await.snapshot();
    Html(page::index(snapshot.records(), None, &state.config.logo))
}

/// POST /cards - Add cards from the form.
pub async fn add(State(state): State<Arc<AppState>>, Form(form): Form<AddForm>) -> Response {
    let result = state.catalog.lock().await.add(form.fields, form.quantity);
    respond(&state, result.map(|_| ())).await
}

/// POST /cards/delete - Delete the selected card.
pub async fn delete(State(state): State<Arc<AppState>>, Form(form): Form<DeleteForm>) -> Response {
    let result = state.catalog.lock().await.delete(&form.id);
    respond(&state, result.map(|_| ())).await
}

/// POST /cards/import - Import an uploaded file.
pub async fn import(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    let bytes = match read_upload(multipart).await {
        Ok(bytes) => bytes,
        Err((status, msg)) => return error_page(&state, status, &msg).await,
    };
    let result = state.catalog.lock().await.import(&bytes);
    respond(&state, result.map(|_| ())).await
}

async fn respond(state: &AppState, result: Result<(), LabelError>) -> Response {
    match result {
        Ok(()) => Redirect::to("/").into_response(),
        Err(err) => {
            let (status, msg) = reject(err);
            error_page(state, status, &msg).await
        }
    }
}

async fn error_page(state: &AppState, status: StatusCode, msg: &str) -> Response {
    let snapshot = state.catalog.lock().await.snapshot();
    (
        status,
        Html(page::index(snapshot.records(), Some(msg), &state.config.logo)),
    )
        .into_response()
}
