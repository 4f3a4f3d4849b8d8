//! # 사용자 관련 응답 DTO 모듈
//!
//! 사용자 생성 결과를 클라이언트에게 전달합니다.
//! 수정(`PUT`)은 204 No Content로 응답하므로 별도 DTO가 없습니다.
//!
//! ```json
//! {
//!   "message": "User created successfully",
//!   "id": "auto-generated-id-123"
//! }
//! ```

pub mod user_response;

pub use user_response::{CreateUserResponse, PLACEHOLDER_USER_ID};
