//! 인사말 / 사용자 데모 API 서버
//!
//! Actix-web 기반의 최소 HTTP 서버입니다.
//! 쿼리/경로 파라미터 인사말, 사용자 생성, 사용자 수정 엔드포인트를 제공하며
//! 영속성, 인증, 캐싱은 없습니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 메서드 + 경로 매칭, 404/405
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 파싱 / 응답 구성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 메시지 구성, 로깅
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use hello_api_server::routes::configure_all_routes;
//!
//! HttpServer::new(|| App::new().configure(configure_all_routes))
//!     .bind("0.0.0.0:8080")?
//!     .run()
//!     .await
//! ```

pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
