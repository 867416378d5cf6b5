//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod health;

use axum::{Router, extract::DefaultBodyLimit, middleware};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{constants::API_BASE_PATH, middleware::logging_middleware, state::AppState};

/// Create all API routes
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes(state))
}

/// Build the served application with every layer attached
pub fn app(state: AppState) -> Router {
    let max_body_bytes = state.config().server.max_body_bytes;

    Router::new()
        .nest(API_BASE_PATH, routes(&state))
        .layer(middleware::from_fn(logging_middleware))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{self, Body},
        http::{self, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::{config::Config, validation::ValidationSchemas};

    fn test_app(config: Config) -> axum::Router {
        app(AppState::new(ValidationSchemas::new(), config))
    }

    async fn send(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = http::Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = test_app(Config::default())
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send("GET", "/api/v1/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "campusconnect");
        assert_eq!(body["schemas"], json!(["signup", "login"]));
    }

    #[tokio::test]
    async fn test_oversize_body_rejected_by_served_app() {
        let mut config = Config::default();
        config.server.max_body_bytes = 16;

        let payload = json!({ "collegeEmail": "asha@college.edu", "password": "s3cret" }).to_string();
        let request = http::Request::builder()
            .method("POST")
            .uri("/api/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, payload.len())
            .body(Body::from(payload))
            .unwrap();

        let response = test_app(config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_cors_headers_attached() {
        let request = http::Request::builder()
            .method("GET")
            .uri("/api/v1/health")
            .header(header::ORIGIN, "https://campus.example.com")
            .body(Body::empty())
            .unwrap();

        let response = test_app(Config::default()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_signup_accepted() {
        let payload = json!({
            "fullName": "Asha Rao",
            "graduationYear": "2030",
            "collegeEmail": "asha@college.edu",
            "course": "BE",
            "usn": "1RV21CS001",
            "fieldOfStudy": "Computer Science",
            "linkedin": "https://www.linkedin.com/in/asha-rao",
            "password": "s3cret",
            "confirmPassword": "s3cret",
            "profilePhoto": null,
        });

        let (status, body) = send("POST", "/api/v1/auth/signup", Some(payload)).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["collegeEmail"], "asha@college.edu");
        assert_eq!(body["fullName"], "Asha Rao");
    }

    #[tokio::test]
    async fn test_signup_rejected() {
        let payload = json!({
            "fullName": "Asha Rao",
            "graduationYear": 2023,
            "collegeEmail": "asha@college.edu",
            "usn": "1RV21CS001",
            "fieldOfStudy": "Computer Science",
            "password": "s3cret",
            "confirmPassword": "s3cret",
        });

        let (status, body) = send("POST", "/api/v1/auth/signup", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "message": "Validation error",
                "details": ["Graduation year must be at least 2024", "Course is required"],
            })
        );
    }

    #[tokio::test]
    async fn test_login_accepted() {
        let payload = json!({ "collegeEmail": "a@b.com", "password": "pw" });
        let (status, body) = send("POST", "/api/v1/auth/login", Some(payload)).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["collegeEmail"], "a@b.com");
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let payload = json!({ "collegeEmail": "not-an-email" });
        let (status, body) = send("POST", "/api/v1/auth/login", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["details"],
            json!(["Please provide a valid email address", "Password is required"])
        );
    }
}
