//! 공통 유틸리티 함수 모듈
//!
//! 문자열 처리, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 경로 분할, 필수값 확인, serde 보조 함수
//! - [`display_terminal`] - 기동 배너 출력 함수들

pub mod string_utils;
pub mod display_terminal;
