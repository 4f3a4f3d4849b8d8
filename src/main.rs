//! 인사말 / 사용자 데모 API 서버 메인 애플리케이션
//!
//! 환경 설정과 로깅을 초기화하고 Actix-web HTTP 서버를 구동합니다.

use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use hello_api_server::config::{CorsConfig, Environment, ServerConfig};
use hello_api_server::routes::{configure_all_routes, ROUTES};
use hello_api_server::utils::display_terminal::print_startup_banner;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Hello API 서버 시작중...");

    // 바인딩 실패 시 에러를 반환하며 프로세스가 비정상 종료됩니다
    start_http_server().await.inspect_err(|e| {
        error!("❌ 서버 실행 실패: {}", e);
    })
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 요청 로깅 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    let mut server = HttpServer::new(|| {
        App::new()
            .wrap(CorsConfig::build())
            .wrap(middleware::Logger::default())
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?;

    if let Some(workers) = ServerConfig::workers() {
        info!("워커 스레드 수: {}", workers);
        server = server.workers(workers);
    }

    print_startup_banner(&bind_address, &ROUTES);
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);

    server.run().await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 / 미설정 - 기본 .env 파일 로드
///
/// 로깅 초기화 전에 실행되므로 결과는 stderr로 직접 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            // 기본 .env 파일은 없어도 무방
            dotenv().ok();
            return;
        }
    };

    if let Err(e) = dotenv::from_filename(filename) {
        eprintln!("{} 파일 로드 실패: {}", filename, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경(`ENVIRONMENT`)에 맞는 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// ```
fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
    info!("Current environment: {:?}", environment);
}
