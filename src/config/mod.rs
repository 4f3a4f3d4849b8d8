//! # Configuration Module
//!
//! 서버 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! 값이 없거나 파싱할 수 없으면 안전한 기본값을 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩 설정
//! - [`cors_config`] - CORS 허용 Origin 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, production
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//! ```

pub mod data_config;
pub mod cors_config;

pub use data_config::*;
pub use cors_config::*;
