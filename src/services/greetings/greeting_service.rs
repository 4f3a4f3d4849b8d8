//! # 인사말 서비스 구현
//!
//! 쿼리/경로 파라미터로 받은 이름으로 인사말 메시지를 구성합니다.

use crate::domain::dto::greetings::GreetingResponse;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::is_present;

/// 이름이 없을 때의 기본 인사말
pub const DEFAULT_GREETING: &str = "Hello, stdlib API Server!";

/// 경로 파라미터가 비었을 때의 에러 메시지
pub const NAME_MISSING: &str = "name is missing";

/// 인사말 서비스
pub struct GreetingService;

static INSTANCE: GreetingService = GreetingService;

impl GreetingService {
    pub fn instance() -> &'static Self {
        &INSTANCE
    }

    /// 선택적 이름으로 인사말을 만듭니다.
    ///
    /// `None`이면 [`DEFAULT_GREETING`]을 반환합니다. 실패하지 않습니다.
    pub fn greet(&self, name: Option<&str>) -> GreetingResponse {
        let message = match name {
            Some(name) => Self::personal_message(name),
            None => DEFAULT_GREETING.to_string(),
        };

        GreetingResponse { message }
    }

    /// 필수 이름으로 인사말을 만듭니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(GreetingResponse)` - `Hello, <name>`
    /// * `Err(AppError::ValidationError)` - 이름이 빈 문자열인 경우 (`name is missing`)
    pub fn greet_required(&self, name: &str) -> AppResult<GreetingResponse> {
        if !is_present(name) {
            return Err(AppError::ValidationError(NAME_MISSING.to_string()));
        }

        Ok(GreetingResponse {
            message: Self::personal_message(name),
        })
    }

    fn personal_message(name: &str) -> String {
        format!("Hello, {}", name)
    }
}
