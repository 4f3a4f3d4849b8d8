//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 사용자 생성 | 201 Created |
//! | `PUT` | `/users`, `/users/modify` | 사용자 수정 | 204 No Content |
//!
//! ## 에러 응답
//!
//! | 상황 | 상태 코드 | 본문 |
//! |------|-----------|------|
//! | JSON 파싱 실패 | 400 | `{"error": "Invalid JSON format"}` |
//! | 필수 필드 누락 | 400 | `{"error": "Name and Email are required"}` |
//! | 허용되지 않은 메서드 | 405 | `{"error": "Method Not Allowed"}` |
//!
//! 본문 구문 오류는 라우트 설정의 `JsonConfig` 에러 핸들러가 변환하고,
//! 객체가 아닌 본문과 타입이 맞지 않는 필드는 [`UserRequest::from_json`]이 거부합니다.

use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::domain::dto::users::request::UserRequest;
use crate::errors::AppResult;
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// { "name": "Alice", "email": "alice@example.com" }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "message": "User created successfully",
///   "id": "auto-generated-id-123"
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Alice","email":"alice@example.com"}'
/// ```
pub async fn create_user(payload: web::Json<Value>) -> AppResult<HttpResponse> {
    // 유효성 검사
    let user = UserRequest::from_json(payload.into_inner())?.into_user()?;

    let response = UserService::instance().create_user(&user);

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 수정 핸들러
///
/// 생성과 같은 검증을 거친 뒤 빈 본문으로 응답합니다.
///
/// # 엔드포인트
///
/// `PUT /users` 또는 `PUT /users/modify`
///
/// # 응답
///
/// ## 성공 (204 No Content)
/// ```bash,ignore
/// HTTP/1.1 204 No Content
/// ```
pub async fn modify_user(payload: web::Json<Value>) -> AppResult<HttpResponse> {
    let user = UserRequest::from_json(payload.into_inner())?.into_user()?;

    UserService::instance().modify_user(&user);

    Ok(HttpResponse::NoContent().finish())
}
