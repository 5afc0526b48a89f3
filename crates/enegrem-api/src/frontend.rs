//! Frontend serving module
//!
//! Serves the comparison page, rendered server-side for the state carried in
//! the query string, plus an optional directory of static assets.

use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::services::ServeDir;
use tracing::{debug, warn};

use crate::{share_from_query, AppState, ErrorResponse};

/// Create frontend router
pub fn create_frontend_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(serve_index))
        .route("/index.html", get(serve_index));

    if let Some(static_dir) = state.config.frontend.static_dir.clone() {
        debug!("Serving static files from {:?}", static_dir);
        router = router.nest_service("/static", ServeDir::new(static_dir));
    }

    router.with_state(state)
}

/// GET /?t=..&e=.. - Render the page for the restored state
async fn serve_index(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    let share = match share_from_query(query) {
        Ok(share) => share,
        Err(rejection) => return rejection.into_response(),
    };
    match state.renderer.render_page(&share.source, &share.candidate) {
        Ok(html) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            html,
        )
            .into_response(),
        Err(e) => {
            warn!("Failed to render page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: format!("Failed to render page: {}", e),
                }),
            )
                .into_response()
        }
    }
}
