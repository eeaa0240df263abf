//! # API REST
//!
//! REST API for the comment ledger.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! The router is built by [`router`] so the binary and tests share one app.

#![warn(rust_2018_idioms)]

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use ledger_core::{Comment, CommentLedger};

/// Application state shared across REST API handlers.
///
/// Holds the [`CommentLedger`] instance behind an `Arc` so every handler
/// clone works against the same sequence.
#[derive(Clone)]
pub struct AppState {
    ledger: Arc<CommentLedger>,
}

impl AppState {
    /// Creates state with an empty ledger.
    pub fn new() -> Self {
        Self {
            ledger: Arc::new(CommentLedger::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Request body for creating a comment.
#[derive(Debug, serde::Deserialize, utoipa::ToSchema)]
pub struct CreateCommentReq {
    /// Comment text; required and non-empty.
    #[serde(default)]
    pub body: Option<String>,
}

/// Error payload returned for rejected requests.
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// Health check payload.
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_comments, create_comment),
    components(schemas(Comment, CreateCommentReq, ErrorRes, HealthRes))
)]
struct ApiDoc;

/// Builds the application router.
///
/// Mounts the comment routes, the health check, and the Swagger UI, with a
/// permissive CORS layer so browser clients can call from any origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/comments", get(list_comments))
        .route("/comments", post(create_comment))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the comment ledger service.
/// This endpoint is used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Comment ledger REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/comments",
    responses(
        (status = 200, description = "All comments in insertion order", body = [Comment])
    )
)]
/// List all comments
///
/// Returns every comment appended so far, oldest first. The response is an
/// empty array until the first successful submission.
#[axum::debug_handler]
async fn list_comments(State(state): State<AppState>) -> Json<Vec<Comment>> {
    Json(state.ledger.list_all())
}

#[utoipa::path(
    post,
    path = "/comments",
    request_body = CreateCommentReq,
    responses(
        (status = 201, description = "Comment created", body = Comment),
        (status = 400, description = "Missing or empty comment body", body = ErrorRes)
    )
)]
/// Submit a new comment
///
/// Appends the comment to the ledger and returns the stored record with its
/// assigned identifier.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the `body` field is missing, empty, or whitespace-only.
#[axum::debug_handler]
async fn create_comment(
    State(state): State<AppState>,
    Json(req): Json<CreateCommentReq>,
) -> Result<(StatusCode, Json<Comment>), (StatusCode, Json<ErrorRes>)> {
    match state.ledger.append(req.body.as_deref().unwrap_or_default()) {
        Ok(comment) => Ok((StatusCode::CREATED, Json(comment))),
        Err(e) => {
            tracing::warn!("Create comment error: {:?}", e);
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorRes {
                    error: "Comment body is required".into(),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, Response};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new())
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, payload: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_alive() {
        let response = app().oneshot(get_req("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["ok"], json!(true));
    }

    #[tokio::test]
    async fn test_comments_start_empty() {
        let response = app().oneshot(get_req("/comments")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_then_list_comments() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json("/comments", json!({ "body": "first" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({ "id": 1, "body": "first" })
        );

        let response = app
            .clone()
            .oneshot(post_json("/comments", json!({ "body": "second" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({ "id": 2, "body": "second" })
        );

        let response = app.oneshot(get_req("/comments")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([
                { "id": 1, "body": "first" },
                { "id": 2, "body": "second" }
            ])
        );
    }

    #[tokio::test]
    async fn test_missing_body_is_rejected_and_ledger_unchanged() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json("/comments", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Comment body is required" })
        );

        let response = app.oneshot(get_req("/comments")).await.unwrap();
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_empty_and_whitespace_bodies_are_rejected() {
        let app = app();

        for payload in [json!({ "body": "" }), json!({ "body": "   " })] {
            let response = app
                .clone()
                .oneshot(post_json("/comments", payload))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await,
                json!({ "error": "Comment body is required" })
            );
        }
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/comments")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
    }
}
