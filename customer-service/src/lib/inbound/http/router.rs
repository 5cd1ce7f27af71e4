use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::register::register;
use crate::domain::user::ports::UserServicePort;

pub struct AppState<S: UserServicePort> {
    pub user_service: Arc<S>,
}

impl<S: UserServicePort> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
        }
    }
}

pub fn create_router<S: UserServicePort>(
    user_service: Arc<S>,
    request_timeout: Duration,
) -> Router {
    let state = AppState { user_service };

    let user_routes = Router::new()
        .route("/v1/user/register", post(register::<S>))
        .route("/v1/user/login", post(login::<S>));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(user_routes)
        .route("/health", get(health))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use mockall::mock;
    use serde_json::json;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::user::models::SignInCommand;
    use crate::domain::user::models::SignUpCommand;
    use crate::domain::user::models::Token;
    use crate::user::errors::RepositoryError;
    use crate::user::errors::UserError;

    mock! {
        pub TestUserService {}

        #[async_trait]
        impl UserServicePort for TestUserService {
            async fn sign_up(&self, command: SignUpCommand) -> Result<(), UserError>;
            async fn sign_in(&self, command: SignInCommand) -> Result<Token, UserError>;
        }
    }

    fn router(service: MockTestUserService) -> Router {
        create_router(Arc::new(service), Duration::from_secs(5))
    }

    fn json_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn register_body() -> String {
        json!({
            "email": "a@b.com",
            "password": "password123",
            "first_name": "A",
            "last_name": "B",
            "phone": "123"
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut service = MockTestUserService::new();
        service
            .expect_sign_up()
            .withf(|command| command.email == "a@b.com" && command.phone == "123")
            .times(1)
            .returning(|_| Ok(()));

        let (status, body) = send(
            router(service),
            json_request("/v1/user/register", &register_body()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status_code"], 200);
    }

    #[tokio::test]
    async fn test_register_maps_service_errors() {
        let cases = [
            (UserError::FailedValidation, StatusCode::BAD_REQUEST),
            (
                UserError::Duplicate("a@b.com".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                UserError::Repository(RepositoryError::Database("down".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let mut service = MockTestUserService::new();
            service
                .expect_sign_up()
                .times(1)
                .returning(move |_| Err(error.clone()));

            let (status, body) = send(
                router(service),
                json_request("/v1/user/register", &register_body()),
            )
            .await;

            assert_eq!(status, expected);
            assert_eq!(body["status_code"], expected.as_u16());
            assert!(body["data"]["message"].is_string());
        }
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let mut service = MockTestUserService::new();
        service.expect_sign_up().returning(|_| {
            Err(UserError::Repository(RepositoryError::Database(
                "password authentication failed for user postgres".to_string(),
            )))
        });

        let (_, body) = send(
            router(service),
            json_request("/v1/user/register", &register_body()),
        )
        .await;

        assert!(!body["data"]["message"]
            .as_str()
            .unwrap()
            .contains("postgres"));
    }

    #[tokio::test]
    async fn test_register_malformed_json_is_bad_request() {
        let mut service = MockTestUserService::new();
        service.expect_sign_up().times(0);

        let (status, body) = send(
            router(service),
            json_request("/v1/user/register", "{\"email\": "),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status_code"], 400);
    }

    #[tokio::test]
    async fn test_register_missing_field_is_bad_request() {
        let mut service = MockTestUserService::new();
        service.expect_sign_up().times(0);

        let (status, _) = send(
            router(service),
            json_request(
                "/v1/user/register",
                &json!({"email": "a@b.com", "password": "password123"}).to_string(),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_success_returns_token() {
        let mut service = MockTestUserService::new();
        service
            .expect_sign_in()
            .withf(|command| command.email == "a@b.com" && command.password == "password123")
            .times(1)
            .returning(|_| {
                Ok(Token {
                    plain_text: "signed-token".to_string(),
                })
            });

        let (status, body) = send(
            router(service),
            json_request(
                "/v1/user/login",
                &json!({"email": "a@b.com", "password": "password123"}).to_string(),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["token"], "signed-token");
    }

    #[tokio::test]
    async fn test_login_wrong_credentials_is_not_found() {
        let mut service = MockTestUserService::new();
        service
            .expect_sign_in()
            .returning(|_| Err(UserError::WrongCredentials));

        let (status, body) = send(
            router(service),
            json_request(
                "/v1/user/login",
                &json!({"email": "a@b.com", "password": "wrongpass1"}).to_string(),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["data"]["message"], "Wrong user credentials");
    }

    #[tokio::test]
    async fn test_health() {
        let response = router(MockTestUserService::new())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"ok");
    }
}
