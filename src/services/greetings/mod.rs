//! 인사말 서비스 모듈

pub mod greeting_service;

pub use greeting_service::GreetingService;
