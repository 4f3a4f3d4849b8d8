//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 사용자 엔티티 (요청 단위로만 존재, 저장하지 않음)
//! └── dto       - 요청/응답 데이터 전송 객체
//! ```
//!
//! 영속성이 없으므로 엔티티는 검증을 통과한 요청 본문의 표현일 뿐이며,
//! 로그 한 줄의 출처로만 사용됩니다.

pub mod entities;
pub mod dto;
