//! Server state and configuration.

use tokio::sync::Mutex;

use crate::catalog::Catalog;
use crate::logos::LogoImage;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Logo registry key or image path (e.g., "banner", "./logo.png")
    pub logo: String,
}

/// Application state shared across handlers.
///
/// The catalog mutex serializes user interactions: each add, delete, or
/// import runs to completion before the next one starts.
pub struct AppState {
    pub config: ServerConfig,
    pub catalog: Mutex<Catalog>,
}

impl AppState {
    pub fn new(config: ServerConfig, logo: LogoImage) -> Self {
        Self {
            config,
            catalog: Mutex::new(Catalog::new(logo)),
        }
    }
}
