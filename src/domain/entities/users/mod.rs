//! Users Entity Module
//!
//! 검증을 통과한 사용자 요청을 나타내는 [`User`] 엔티티를 포함합니다.

pub mod user;

pub use user::User;
