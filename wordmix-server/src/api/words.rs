//! Puzzle endpoint

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::error::ApiResult;
use crate::AppState;

/// GET /word/new
///
/// Draws a random eligible word and returns it together with a scrambled
/// copy, both uppercase: `{"Shuffled":"RETHAWE","Solution":"WEATHER"}`.
/// Any origin may call it.
pub async fn new_word(State(state): State<AppState>) -> ApiResult<Response> {
    let puzzle = state.words.draw(&mut rand::thread_rng());
    debug!("Serving puzzle {} -> {}", puzzle.solution, puzzle.shuffled);

    let body = serde_json::to_vec(&puzzle).map_err(|e| {
        error!("Failed to encode puzzle for {}: {}", puzzle.solution, e);
        e
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        body,
    )
        .into_response())
}
