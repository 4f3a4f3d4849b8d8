//! # Users DTO Module
//!
//! ```text
//! users/
//! ├── request/
//! │   └── user_request.rs   ← 생성/수정 공통 요청
//! └── response/
//!     └── user_response.rs  ← 생성 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
