use serde::Serialize;

/// 발급되는 사용자 ID (영속성이 없으므로 항상 고정값)
pub const PLACEHOLDER_USER_ID: &str = "auto-generated-id-123";

/// 사용자 생성 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub id: String,
}

impl CreateUserResponse {
    /// 생성 성공 응답
    pub fn created() -> Self {
        Self {
            message: "User created successfully".to_string(),
            id: PLACEHOLDER_USER_ID.to_string(),
        }
    }
}
