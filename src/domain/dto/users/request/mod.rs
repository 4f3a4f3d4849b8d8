//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 Rust 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (실패 시 `Invalid JSON format`)
//! 2. **필수값 검증**: `validator` 크레이트로 빈 필드 확인 (실패 시 `Name and Email are required`)

pub mod user_request;

pub use user_request::{UserRequest, USER_FIELDS_REQUIRED};
