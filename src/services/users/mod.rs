//! 사용자 관리 서비스 모듈
//!
//! 영속성이 없으므로 생성/수정은 로그 기록과 응답 구성만 수행합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user = request.into_user()?;
//! let response = UserService::instance().create_user(&user);
//! ```

pub mod user_service;

pub use user_service::UserService;
