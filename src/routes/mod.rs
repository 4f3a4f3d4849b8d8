//! API 라우트 설정 모듈
//!
//! 메서드 + 경로를 핸들러에 매칭하고, 추출기 에러를 [`AppError`]로 통일합니다.
//!
//! # Route Table
//!
//! | 메서드 | 경로 | 핸들러 | 그 외 메서드 |
//! |--------|------|--------|--------------|
//! | `GET`, `HEAD` | `/hello` | `greetings::hello` | 405 (`Allow: GET, HEAD`) |
//! | `GET`, `HEAD` | `/hello/{name}` | `greetings::hello_by_path` | 405 (`Allow: GET, HEAD`) |
//! | `POST` | `/users` | `users::create_user` | 405 (`Allow: POST, PUT`) |
//! | `PUT` | `/users` | `users::modify_user` | |
//! | `PUT` | `/users/modify` | `users::modify_user` | 405 (`Allow: PUT`) |
//! | `GET` | `/health` | `health_check` | |
//!
//! 그 밖의 경로는 404를 반환합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::error::JsonPayloadError;
use actix_web::http::Method;
use actix_web::{web, HttpRequest};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers::{fallback, greetings, users};

/// 기동 배너에 출력되는 라우트 목록
pub const ROUTES: [(&str, &str); 6] = [
    ("GET", "/hello"),
    ("GET", "/hello/{name}"),
    ("POST", "/users"),
    ("PUT", "/users"),
    ("PUT", "/users/modify"),
    ("GET", "/health"),
];

const GREETING_METHODS: &[Method] = &[Method::GET, Method::HEAD];
const USERS_METHODS: &[Method] = &[Method::POST, Method::PUT];
const PUT_ONLY: &[Method] = &[Method::PUT];

/// 모든 라우트를 설정합니다
///
/// JSON 추출기 설정과 404 기본 서비스도 함께 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(health_check);

    configure_greeting_routes(cfg);
    configure_user_routes(cfg);

    cfg.default_service(web::to(fallback::not_found));
}

/// 인사말 라우트를 설정합니다
///
/// `/hello/{name:.*}`는 빈 이름(`/hello/`)과 다중 세그먼트(`/hello/a/b`)까지
/// 캡처하며, 첫 세그먼트 추출은 핸들러가 담당합니다.
/// `HEAD`는 `GET`과 같은 핸들러로 처리되고 본문은 서버가 생략합니다.
fn configure_greeting_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/hello")
            .route(web::get().to(greetings::hello))
            .route(web::head().to(greetings::hello))
            .default_service(fallback::method_not_allowed(GREETING_METHODS)),
    );

    cfg.service(
        web::resource("/hello/{name:.*}")
            .route(web::get().to(greetings::hello_by_path))
            .route(web::head().to(greetings::hello_by_path))
            .default_service(fallback::method_not_allowed(GREETING_METHODS)),
    );
}

/// 사용자 라우트를 설정합니다
///
/// ```bash
/// # 생성
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Alice","email":"alice@example.com"}'
///
/// # 수정
/// curl -X PUT http://localhost:8080/users/modify \
///   -d '{"name":"Alice","email":"alice@example.com"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::post().to(users::create_user))
            .route(web::put().to(users::modify_user))
            .default_service(fallback::method_not_allowed(USERS_METHODS)),
    );

    cfg.service(
        web::resource("/users/modify")
            .route(web::put().to(users::modify_user))
            .default_service(fallback::method_not_allowed(PUT_ONLY)),
    );
}

/// JSON 본문 추출 설정
///
/// `Content-Type`과 무관하게 본문을 JSON으로 파싱하고,
/// 실패 시 `Invalid JSON format` 응답으로 변환합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err: JsonPayloadError, req: &HttpRequest| {
            log::debug!("JSON 파싱 실패 ({} {}): {}", req.method(), req.path(), err);
            AppError::InvalidJson.into()
        })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "hello_api_server",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::domain::dto::users::request::USER_FIELDS_REQUIRED;
    use crate::domain::dto::users::response::PLACEHOLDER_USER_ID;

    macro_rules! app {
        () => {
            test::init_service(App::new().configure(configure_all_routes)).await
        };
    }

    fn valid_user() -> Value {
        json!({ "name": "Alice", "email": "alice@example.com" })
    }

    #[actix_web::test]
    async fn test_hello_without_query_returns_default_message() {
        let app = app!();
        let req = test::TestRequest::get().uri("/hello").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Hello, stdlib API Server!" }));
    }

    #[actix_web::test]
    async fn test_hello_with_query_name() {
        let app = app!();
        let req = test::TestRequest::get().uri("/hello?name=Bob").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Hello, Bob");
    }

    #[actix_web::test]
    async fn test_hello_with_empty_query_name_uses_default() {
        let app = app!();
        let req = test::TestRequest::get().uri("/hello?name=").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["message"], "Hello, stdlib API Server!");
    }

    #[actix_web::test]
    async fn test_hello_with_repeated_name_uses_first() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/hello?name=Bob&name=Eve")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["message"], "Hello, Bob");
    }

    #[actix_web::test]
    async fn test_hello_path_with_empty_name_is_bad_request() {
        let app = app!();
        let req = test::TestRequest::get().uri("/hello/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "name is missing" }));
    }

    #[actix_web::test]
    async fn test_hello_path_with_name() {
        let app = app!();
        let req = test::TestRequest::get().uri("/hello/Alice").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Hello, Alice" }));
    }

    #[actix_web::test]
    async fn test_hello_path_uses_first_segment() {
        let app = app!();
        let req = test::TestRequest::get().uri("/hello/Alice/extra").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["message"], "Hello, Alice");
    }

    #[actix_web::test]
    async fn test_hello_rejects_post() {
        let app = app!();
        let req = test::TestRequest::post().uri("/hello").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers().get(header::ALLOW).unwrap(), "GET, HEAD");
    }

    #[actix_web::test]
    async fn test_hello_path_rejects_post() {
        let app = app!();
        let req = test::TestRequest::post().uri("/hello/Alice").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers().get(header::ALLOW).unwrap(), "GET, HEAD");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Method Not Allowed" }));
    }

    #[actix_web::test]
    async fn test_hello_accepts_head() {
        let app = app!();

        for uri in ["/hello", "/hello?name=Bob", "/hello/Alice"] {
            let req = test::TestRequest::default()
                .method(Method::HEAD)
                .uri(uri)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::OK, "HEAD {}", uri);
        }
    }

    #[actix_web::test]
    async fn test_hello_with_undecodable_query_still_greets() {
        let app = app!();
        let req = test::TestRequest::get().uri("/hello?name=%FF%ZZ").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].as_str().unwrap().starts_with("Hello, "));
    }

    #[actix_web::test]
    async fn test_create_user_returns_created_with_fixed_id() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(valid_user())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "message": "User created successfully", "id": PLACEHOLDER_USER_ID })
        );
    }

    #[actix_web::test]
    async fn test_create_user_missing_email_is_bad_request() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Alice" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": USER_FIELDS_REQUIRED }));
    }

    #[actix_web::test]
    async fn test_create_user_malformed_json_is_bad_request() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/users")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"name\": \"Alice\",")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Invalid JSON format" }));
    }

    #[actix_web::test]
    async fn test_user_array_body_is_invalid_json() {
        let app = app!();

        for (method, uri, body) in [
            (Method::POST, "/users", r#"["Alice","alice@example.com"]"#),
            (Method::POST, "/users", "[]"),
            (Method::PUT, "/users", r#"["Alice","alice@example.com"]"#),
            (Method::PUT, "/users/modify", r#"["Alice","alice@example.com"]"#),
        ] {
            let req = test::TestRequest::default()
                .method(method.clone())
                .uri(uri)
                .set_payload(body)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{} {} {}", method, uri, body);
            let json: Value = test::read_body_json(resp).await;
            assert_eq!(json, json!({ "error": "Invalid JSON format" }));
        }
    }

    #[actix_web::test]
    async fn test_user_wrong_field_type_is_invalid_json() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": 5, "email": "alice@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Invalid JSON format" }));
    }

    #[actix_web::test]
    async fn test_user_null_body_requires_fields() {
        let app = app!();

        for (method, uri) in [(Method::POST, "/users"), (Method::PUT, "/users/modify")] {
            let req = test::TestRequest::default()
                .method(method)
                .uri(uri)
                .set_payload("null")
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "error": USER_FIELDS_REQUIRED }));
        }
    }

    #[actix_web::test]
    async fn test_user_field_names_are_case_sensitive() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "Name": "Alice", "Email": "alice@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": USER_FIELDS_REQUIRED }));
    }

    #[actix_web::test]
    async fn test_user_trailing_data_is_invalid_json() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/users")
            .set_payload(format!("{} garbage", valid_user()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Invalid JSON format" }));
    }

    #[actix_web::test]
    async fn test_create_user_accepts_body_without_content_type() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/users")
            .set_payload(valid_user().to_string())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_create_user_empty_body_is_invalid_json() {
        let app = app!();
        let req = test::TestRequest::post().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid JSON format");
    }

    #[actix_web::test]
    async fn test_modify_user_returns_no_content() {
        let app = app!();
        let req = test::TestRequest::put()
            .uri("/users")
            .set_json(valid_user())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn test_modify_user_on_modify_path() {
        let app = app!();
        let req = test::TestRequest::put()
            .uri("/users/modify")
            .set_json(valid_user())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_modify_user_missing_name_is_bad_request() {
        let app = app!();
        let req = test::TestRequest::put()
            .uri("/users")
            .set_json(json!({ "name": "", "email": "alice@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_users_rejects_other_methods() {
        let app = app!();
        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers().get(header::ALLOW).unwrap(), "POST, PUT");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Method Not Allowed" }));

        let req = test::TestRequest::delete().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn test_users_modify_rejects_post() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/users/modify")
            .set_json(valid_user())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers().get(header::ALLOW).unwrap(), "PUT");
    }

    #[actix_web::test]
    async fn test_unknown_path_is_not_found() {
        let app = app!();
        let req = test::TestRequest::get().uri("/nope").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Not Found" }));
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = app!();
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "hello_api_server");
    }
}
