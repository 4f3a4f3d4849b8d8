//! # 사용자 관리 서비스 구현
//!
//! 검증을 통과한 [`User`]를 받아 처리 결과를 반환합니다.
//! 저장소가 없으므로 처리 내용은 `info` 로그 한 줄로 남습니다.
//!
//! ```text
//! [INFO] Received new user: Name=Alice, Email=alice@example.com
//! [INFO] Received modify user: Name=Alice, Email=alice@example.com
//! ```

use crate::domain::dto::users::response::CreateUserResponse;
use crate::domain::entities::User;

/// 사용자 서비스
pub struct UserService;

static INSTANCE: UserService = UserService;

impl UserService {
    pub fn instance() -> &'static Self {
        &INSTANCE
    }

    /// 새 사용자 생성
    ///
    /// 항상 고정 ID(`auto-generated-id-123`)를 담은 응답을 반환합니다.
    pub fn create_user(&self, user: &User) -> CreateUserResponse {
        log::info!("Received new user: {}", user);
        CreateUserResponse::created()
    }

    /// 기존 사용자 수정
    pub fn modify_user(&self, user: &User) {
        log::info!("Received modify user: {}", user);
    }
}
