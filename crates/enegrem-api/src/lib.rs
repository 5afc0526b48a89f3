//! ENEGREM HTTP API
//!
//! Exposes the letter comparison over HTTP using axum, builds share links,
//! and serves the comparison page.
//!
//! # Routes
//!
//! - `GET /api/` - API status
//! - `GET /api/health` - Health check
//! - `GET /api/compare?t=..&e=..` - Compare from query parameters
//! - `POST /api/compare` - Compare from a JSON body
//! - `GET /api/share?t=..&e=..` - Build a share link
//! - `GET /?t=..&e=..` - The comparison page

pub mod frontend;
pub mod share;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use enegrem_config::AppConfig;
use enegrem_core::{compare, Comparison};
use enegrem_template::{PageRenderer, TemplateResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

pub use share::ShareState;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Page renderer with the compiled template
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    /// Build the state, compiling the page template
    pub fn new(config: AppConfig) -> TemplateResult<Self> {
        let renderer = PageRenderer::new(config.frontend.clone())?;
        Ok(Self {
            config: Arc::new(config),
            renderer: Arc::new(renderer),
        })
    }
}

/// API status response
#[derive(Serialize)]
struct ApiStatus {
    message: &'static str,
}

/// Body of `POST /api/compare`
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub candidate: String,
}

/// Share link response
#[derive(Debug, Serialize, Deserialize)]
pub struct ShareResponse {
    pub url: String,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Rejection for a query string that cannot be decoded
pub(crate) type QueryRejection = (StatusCode, Json<ErrorResponse>);

/// Decode the share state from a raw query string
pub(crate) fn share_from_query(query: Option<String>) -> Result<ShareState, QueryRejection> {
    ShareState::from_query(query.as_deref().unwrap_or_default()).map_err(|e| {
        warn!("Invalid query string: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: format!("Invalid query string: {}", e),
            }),
        )
    })
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_router = Router::new()
        .route("/api/", get(api_status))
        .route("/api/health", get(health_check))
        .route("/api/compare", get(compare_query).post(compare_body))
        .route("/api/share", get(share_link))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state.clone());

    // Page routes take lower priority than API routes
    frontend::create_frontend_router(state).merge(api_router)
}

/// Start the API server
pub async fn start_server(state: AppState, addr: &str) -> std::io::Result<()> {
    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on {}", addr);
    axum::serve(listener, router).await
}

// ==================== Handlers ====================

/// GET /api/ - Returns API status
async fn api_status() -> Json<ApiStatus> {
    Json(ApiStatus {
        message: "API running.",
    })
}

/// GET /api/health - Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// GET /api/compare - Compare the `t` and `e` query parameters
async fn compare_query(
    RawQuery(query): RawQuery,
) -> Result<Json<Comparison>, QueryRejection> {
    let share = share_from_query(query)?;
    debug!(
        "Comparing from query ({} / {} bytes)",
        share.source.len(),
        share.candidate.len()
    );
    Ok(Json(compare(&share.source, &share.candidate)))
}

/// POST /api/compare - Compare a JSON `{source, candidate}` body
async fn compare_body(Json(request): Json<CompareRequest>) -> Json<Comparison> {
    debug!(
        "Comparing from body ({} / {} bytes)",
        request.source.len(),
        request.candidate.len()
    );
    Json(compare(&request.source, &request.candidate))
}

/// GET /api/share - Build the link that restores `t` and `e`
async fn share_link(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ShareResponse>, QueryRejection> {
    let share = share_from_query(query)?;
    Ok(Json(ShareResponse {
        url: share.share_url(&state.config.server.base_url()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(AppConfig::default()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_api_status() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(Request::builder().uri("/api/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], "API running.");
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_compare_query() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/compare?t=hello&e=hole")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["is_complete"], false);
        assert_eq!(json["letter_count"]["L"], 1);
        assert_eq!(
            json["source_remaining"],
            serde_json::json!([null, null, null, "L", null])
        );
    }

    #[tokio::test]
    async fn test_compare_query_without_params() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/compare")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["is_complete"], false);
    }

    #[tokio::test]
    async fn test_compare_query_repeated_key() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/compare?t=cat&e=act&t=dog")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["is_complete"], true);
        assert_eq!(json["source_letters"], serde_json::json!(["A", "C", "T"]));
    }

    #[tokio::test]
    async fn test_compare_body() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/compare")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"source": "café", "candidate": "ACEF"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["is_complete"], true);
    }

    #[tokio::test]
    async fn test_compare_body_rejects_malformed_json() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/compare")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_share_link() {
        let mut config = AppConfig::default();
        config.server.public_url = Some("https://enegrem.example".to_string());
        let app = create_router(AppState::new(config).unwrap());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/share?t=cat&e=")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["url"],
            "https://enegrem.example/?t=cat"
        );
    }

    #[tokio::test]
    async fn test_cors_headers() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header(header::ORIGIN, "https://elsewhere.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
