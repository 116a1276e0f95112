//! Game client entry point
//!
//! The client itself is a set of static files served from the configured
//! static directory; the root path only points browsers at it.

use axum::response::Redirect;

/// Page the root path redirects to
pub const INDEX_PATH: &str = "/index.html";

/// GET /
///
/// Permanent (308) redirect to the client page
pub async fn redirect_to_index() -> Redirect {
    Redirect::permanent(INDEX_PATH)
}
