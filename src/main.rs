//! 사용자 CRUD 서비스 메인 애플리케이션
//!
//! 환경 설정을 로드하고 MongoDB 핸들을 생성한 뒤, Actix-web HTTP 서버를 구동합니다.
//! 서버가 종료되면 MongoDB 클라이언트를 정리합니다.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use user_crud_service::config::{CorsConfig, DataConfig, ServerConfig};
use user_crud_service::db::Database;
use user_crud_service::repositories::users::{UserRepository, UserStore};
use user_crud_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let (env_file, loaded) = load_env_file();
    init_logging();

    match loaded {
        Ok(_) => info!("{} 파일 로드 됨", env_file),
        Err(e) => warn!("{} 파일 로드 실패: {}", env_file, e),
    }

    info!("🚀 사용자 CRUD 서비스 시작중...");

    let config = DataConfig::from_env().map_err(io::Error::other)?;
    let database = Database::connect(&config).await.map_err(io::Error::other)?;
    database.spawn_connection_check();

    let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));

    let result = start_http_server(web::Data::from(store)).await;

    database.shutdown().await;
    info!("👋 서비스 종료");

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(store: web::Data<dyn UserStore>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let allowed_origins = CorsConfig::allowed_origins();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);

        App::new()
            .app_data(store.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거 초기화 전에 호출되므로 결과는 반환만 하고, 로그는 호출한 쪽에서 남깁니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타/미지정 - 기본 .env 파일 로드
fn load_env_file() -> (&'static str, dotenv::Result<PathBuf>) {
    let env_file = match std::env::var("PROFILE").unwrap_or_default().as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    (env_file, dotenv::from_filename(env_file))
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다. 모든 라우트가 GET이므로
/// GET과 Preflight만 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
