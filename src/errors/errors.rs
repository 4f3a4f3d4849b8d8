//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 요청 단위 에러를 표현하는 통합 에러 타입입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 에러를
//! `{"error": "<message>"}` 형태의 JSON 응답으로 변환합니다.
//!
//! ## 상태 코드 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `InvalidJson` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `MethodNotAllowed` | 405 Method Not Allowed (+ `Allow` 헤더) |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn greet(name: &str) -> Result<HttpResponse, AppError> {
//!     if name.is_empty() {
//!         return Err(AppError::ValidationError("name is missing".to_string()));
//!     }
//!     Ok(HttpResponse::Ok().finish())
//! }
//! ```

use actix_web::http::header::{self, HeaderValue};
use actix_web::http::{Method, StatusCode};
use actix_web::HttpResponse;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `Display` 출력이 그대로 클라이언트 응답의 `error` 필드가 됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 요청 본문 JSON 파싱 실패 (400 Bad Request)
    #[error("Invalid JSON format")]
    InvalidJson,

    /// 등록되지 않은 경로 (404 Not Found)
    #[error("Not Found")]
    NotFound,

    /// 경로는 존재하지만 메서드가 허용되지 않음 (405 Method Not Allowed)
    ///
    /// 허용되는 메서드 목록은 `Allow` 헤더로 전달됩니다.
    #[error("Method Not Allowed")]
    MethodNotAllowed(Vec<Method>),
}

impl AppError {
    /// `Allow` 헤더 값을 생성합니다. 예: `"POST, PUT"`
    fn allow_header(methods: &[Method]) -> String {
        methods
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidJson => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 405 응답에는 허용 메서드를 담은 `Allow` 헤더가 추가됩니다.
    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        if let AppError::MethodNotAllowed(methods) = self {
            if let Ok(value) = HeaderValue::from_str(&Self::allow_header(methods)) {
                builder.insert_header((header::ALLOW, value));
            }
        }

        builder.json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
