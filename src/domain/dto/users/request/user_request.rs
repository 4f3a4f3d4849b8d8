//! 사용자 생성/수정 요청 DTO
//!
//! `POST /users`, `PUT /users`, `PUT /users/modify`가 공통으로 받는 요청 본문입니다.
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::domain::entities::User;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::deserialize_null_as_empty;

/// 필수 필드 누락 시 클라이언트에 전달되는 메시지
pub const USER_FIELDS_REQUIRED: &str = "Name and Email are required";

/// 사용자 요청 DTO
///
/// 누락된 필드와 `null`은 빈 문자열로 역직렬화되고,
/// 빈 문자열은 [`Validate`] 단계에서 거부됩니다. 알 수 없는 필드는 무시됩니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserRequest {
    /// 사용자 이름
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// 사용자 이메일 (형식 검증 없음, 존재 여부만 확인)
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
}

impl UserRequest {
    /// 파싱된 JSON 본문에서 요청을 구성합니다.
    ///
    /// 최상위 값은 객체여야 합니다. `null`은 빈 요청으로 취급되어
    /// 이후 필수값 검증에서 거부되고, 배열이나 스칼라 값, 타입이 맞지 않는
    /// 필드는 [`AppError::InvalidJson`]이 됩니다.
    pub fn from_json(body: Value) -> AppResult<Self> {
        match body {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => serde_json::from_value(body).map_err(|e| {
                log::debug!("사용자 요청 역직렬화 실패: {}", e);
                AppError::InvalidJson
            }),
            other => {
                log::debug!("객체가 아닌 요청 본문: {}", other);
                Err(AppError::InvalidJson)
            }
        }
    }

    /// 필수값을 검증하고 [`User`] 엔티티로 변환합니다.
    ///
    /// 어느 필드가 비었든 동일한 메시지로 400을 반환합니다.
    pub fn into_user(self) -> AppResult<User> {
        if let Err(e) = self.validate() {
            log::debug!("사용자 요청 검증 실패: {}", e);
            return Err(AppError::ValidationError(USER_FIELDS_REQUIRED.to_string()));
        }

        Ok(User::new(self.name, self.email))
    }
}
