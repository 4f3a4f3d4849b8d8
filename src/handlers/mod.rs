//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 각 핸들러는 상태가 없으며, 입력 검증 후 서비스 계층을 호출해
//! JSON 응답을 구성합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Routes - 메서드 + 경로 매칭
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 요청 파싱/응답 구성       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 메시지 구성, 로깅                  ← Service Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`greetings`**: 인사말 엔드포인트
//!   - 쿼리 기반 (`GET /hello`)
//!   - 경로 기반 (`GET /hello/{name}`)
//! - **`users`**: 사용자 엔드포인트
//!   - 사용자 생성 (`POST /users`)
//!   - 사용자 수정 (`PUT /users`, `PUT /users/modify`)
//! - **`fallback`**: 404 / 405 응답
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `AppResult<HttpResponse>`를 반환하며,
//! `?` 연산자로 전파된 [`AppError`](crate::errors::AppError)는
//! `ResponseError` 구현을 통해 JSON 에러 응답으로 변환됩니다.

pub mod greetings;
pub mod users;
pub mod fallback;
