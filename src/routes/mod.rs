//! API 라우트 설정 모듈
//!
//! 사용자 CRUD 라우트와 헬스체크 엔드포인트를 등록합니다.
//!
//! 모든 라우트에 공통으로 적용되는 [`web::QueryConfig`]를 등록하여, 쿼리 문자열
//! 역직렬화 실패(알 수 없는 파라미터, 숫자가 아닌 `age` 등)를
//! [`AppError::ValidationError`]로 변환합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));
//! let app = App::new()
//!     .app_data(web::Data::from(store))
//!     .configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 핸들러가 사용하는 `web::Data<dyn UserStore>`는 호출하는 쪽에서 `app_data`로
/// 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `GET /create` - 사용자 생성
/// - `GET /retrieve` - 사용자 조회
/// - `GET /update` - 사용자 수정
/// - `GET /delete` - 사용자 삭제
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::create_user)
        .service(handlers::users::retrieve_users)
        .service(handlers::users::update_user)
        .service(handlers::users::delete_users);
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_crud_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_crud_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB"
        }
    }))
}
