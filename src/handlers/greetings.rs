//! # Greeting HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/hello` | 쿼리 파라미터 기반 인사말 | 200 OK |
//! | `GET` | `/hello/{name}` | 경로 파라미터 기반 인사말 | 200 OK / 400 Bad Request |

use actix_web::{web, HttpResponse};

use crate::domain::dto::greetings::GreetingQuery;
use crate::errors::AppResult;
use crate::services::greetings::GreetingService;
use crate::utils::string_utils::first_path_segment;

/// 쿼리 파라미터 인사말 핸들러
///
/// # 엔드포인트
///
/// `GET /hello?name=<name>`
///
/// # 응답
///
/// ## 이름 없음 (200 OK)
/// ```json
/// { "message": "Hello, stdlib API Server!" }
/// ```
///
/// ## 이름 있음 (200 OK)
/// ```json
/// { "message": "Hello, Bob" }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl "http://localhost:8080/hello?name=Bob"
/// ```
pub async fn hello(query: web::Query<GreetingQuery>) -> AppResult<HttpResponse> {
    let response = GreetingService::instance().greet(query.name());

    Ok(HttpResponse::Ok().json(response))
}

/// 경로 파라미터 인사말 핸들러
///
/// 라우트는 `/hello/` 이후 경로 전체를 캡처하고,
/// 여기서 `/` 기준으로 분할해 첫 세그먼트를 이름으로 사용합니다.
///
/// # 엔드포인트
///
/// `GET /hello/{name}`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "message": "Hello, Alice" }
/// ```
///
/// ## 이름 누락 (400 Bad Request)
/// ```json
/// { "error": "name is missing" }
/// ```
pub async fn hello_by_path(tail: web::Path<String>) -> AppResult<HttpResponse> {
    let name = first_path_segment(&tail);
    let response = GreetingService::instance().greet_required(name)?;

    Ok(HttpResponse::Ok().json(response))
}
