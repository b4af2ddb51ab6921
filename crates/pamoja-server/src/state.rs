//! Application State

use std::sync::Arc;

use pamoja_core::PlanCatalog;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// Directory holding the built WASM bundle and index.html
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: "static".into(),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `BIND_ADDR` and `STATIC_DIR`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Catalog compiled into the bundle, reported by the health check
    pub catalog: Arc<PlanCatalog>,

    pub config: Arc<ServerConfig>,
}
