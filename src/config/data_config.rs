//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 바인딩 주소, 워커 수, 실행 환경 관련 설정을 관리합니다.

use std::env;

/// 기본 바인딩 포트
pub const DEFAULT_PORT: u16 = 8080;

/// 기본 바인딩 호스트 (모든 인터페이스)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Development`를 기본값으로 사용합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Development)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            _ => Environment::Production,
        }
    }

    /// 환경에 맞는 기본 로그 필터를 반환합니다.
    ///
    /// `RUST_LOG`가 설정되지 않았을 때 사용됩니다.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development => "debug,actix_web=info",
            Environment::Test => "warn",
            Environment::Production => "info,actix_web=info",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        Self::parse_port(env::var("PORT").ok().as_deref())
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST")
            .ok()
            .filter(|host| !host.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    /// HTTP 워커 스레드 수를 반환합니다.
    ///
    /// `None`이면 actix-web 기본값(CPU 코어 수)을 사용합니다.
    ///
    /// # Environment Variables
    ///
    /// - `WORKERS`: 양의 정수
    pub fn workers() -> Option<usize> {
        Self::parse_workers(env::var("WORKERS").ok().as_deref())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    fn parse_port(value: Option<&str>) -> u16 {
        match value {
            Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
                log::warn!("PORT 파싱 실패: {}. 기본값 {} 사용", e, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        }
    }

    fn parse_workers(value: Option<&str>) -> Option<usize> {
        value
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|&workers| workers > 0)
    }
}
