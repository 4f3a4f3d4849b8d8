//! 라우트에 매칭되지 않은 요청을 처리하는 핸들러

use actix_web::http::Method;
use actix_web::{web, HttpResponse, Route};

use crate::errors::{AppError, AppResult};

/// 등록되지 않은 경로 (404 Not Found)
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound)
}

/// 리소스의 나머지 메서드를 405로 거부하는 라우트
///
/// `web::resource(...).default_service(...)`에 연결해 사용합니다.
///
/// ```rust,ignore
/// web::resource("/users")
///     .route(web::post().to(users::create_user))
///     .default_service(fallback::method_not_allowed(&[Method::POST]))
/// ```
pub fn method_not_allowed(allowed: &'static [Method]) -> Route {
    web::route().to(move || async move {
        Err::<HttpResponse, _>(AppError::MethodNotAllowed(allowed.to_vec()))
    })
}
