//! 사용자 엔티티
//!
//! 이름과 이메일, 두 개의 필수 문자열 필드를 가집니다.
//! 단일 요청 범위에서만 존재하며 저장되지 않습니다.

use std::fmt;

/// 사용자 엔티티
///
/// [`UserRequest::into_user`](crate::domain::dto::users::request::UserRequest::into_user)를
/// 통해서만 생성되므로 두 필드 모두 비어 있지 않음이 보장됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub(crate) fn new(name: String, email: String) -> Self {
        Self { name, email }
    }
}

/// 로그 출력 형식: `Name=<name>, Email=<email>`
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name={}, Email={}", self.name, self.email)
    }
}
