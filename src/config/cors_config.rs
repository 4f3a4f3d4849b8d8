//! CORS 설정 관리 모듈

use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// 허용 Origin 기본값 (로컬 프론트엔드 개발 서버 및 자체 서버)
const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `CORS_ALLOWED_ORIGINS`: 쉼표로 구분된 Origin 목록
    ///
    /// # Examples
    ///
    /// ```bash
    /// CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
    /// ```
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    /// CORS 미들웨어를 구성합니다.
    pub fn build() -> Cors {
        Self::allowed_origins()
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600)
    }

    fn parse_origins(value: Option<&str>) -> Vec<String> {
        let origins: Vec<String> = value
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
        } else {
            origins
        }
    }
}
