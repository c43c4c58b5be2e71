//! # HTTP Server for the Label Catalog
//!
//! Provides a web form for building a catalog of labels, a JSON API, and
//! PDF / HTML downloads.
//!
//! ## Usage
//!
//! ```bash
//! placard serve --listen 0.0.0.0:8080 --logo banner
//! ```
//!
//! Then open http://localhost:8080 in a browser.
//!
//! ## Routes
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Form page and card preview |
//! | POST | `/cards` | Add cards (form) |
//! | POST | `/cards/delete` | Delete a card (form) |
//! | POST | `/cards/import` | Import a file (multipart `file`) |
//! | GET | `/cards.pdf` | Label sheet download |
//! | GET | `/cards.html` | HTML snapshot download |
//! | GET | `/api/cards` | List cards |
//! | POST | `/api/cards` | Add cards (JSON) |
//! | DELETE | `/api/cards/:id` | Delete a card |
//! | POST | `/api/cards/import` | Import a file (multipart `file`) |

mod handlers;
mod page;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{LabelError, Result};
use crate::logos;

/// Upload size limit for imported files.
const UPLOAD_LIMIT: usize = 10 * 1024 * 1024;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Form page
        .route("/", get(handlers::cards::index))
        .route("/cards", post(handlers::cards::add))
        .route("/cards/delete", post(handlers::cards::delete))
        .route(
            "/cards/import",
            post(handlers::cards::import).layer(DefaultBodyLimit::max(UPLOAD_LIMIT)),
        )
        // Downloads
        .route("/cards.pdf", get(handlers::export::pdf))
        .route("/cards.html", get(handlers::export::html))
        // JSON API
        .route("/api/cards", get(handlers::api::list).post(handlers::api::add))
        .route("/api/cards/:id", delete(handlers::api::delete))
        .route(
            "/api/cards/import",
            post(handlers::api::import).layer(DefaultBodyLimit::max(UPLOAD_LIMIT)),
        )
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use placard::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), placard::error::LabelError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     logo: "banner".to_string(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<()> {
    let logo = logos::resolve(&config.logo)?;
    let app = router(Arc::new(AppState::new(config.clone(), logo)));

    info!(listen = %config.listen_addr, logo = %config.logo, "placard server starting");

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            LabelError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| LabelError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
