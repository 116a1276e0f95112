//! wordmix-server library
//!
//! HTTP service handing out random words together with a scrambled copy of
//! their letters, for a word-guessing game client.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use wordmix_common::WordBank;

pub mod api;
pub mod error;
pub mod startup;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Eligible words, read-only after startup
    pub words: Arc<WordBank>,
}

impl AppState {
    /// Create new application state
    pub fn new(words: WordBank) -> Self {
        Self {
            words: Arc::new(words),
        }
    }
}

/// Build application router
///
/// Paths without a route fall through to files under `static_dir`.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::redirect_to_index))
        .route("/word/new", get(api::new_word))
        .merge(api::health_routes())
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
