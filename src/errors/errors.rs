//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다.
//! Actix-Web은 `Err` 값을 [`ResponseError`](actix_web::ResponseError) 구현을 통해
//! JSON 에러 응답으로 변환하므로, 저장소 계층에서 발생한 실패가 요청 파이프라인을
//! 중단시키지 않고 일관된 형태로 클라이언트에 전달됩니다.
//!
//! 쿼리 문자열 파싱 실패 역시 `routes` 모듈의 `QueryConfig` 에러 핸들러를 통해
//! [`AppError::ValidationError`]로 변환되어 같은 경로를 탑니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn find(filter: &UserFilter) -> Result<Vec<User>, AppError> {
//!     let cursor = collection.find(filter.to_document()?).await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//!     // ...
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("❌ 요청 처리 실패: {}", self);
        } else {
            log::debug!("요청 거부: {}", self);
        }

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("age is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("server selection timeout".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_config_error_response() {
        let error = AppError::ConfigError("MONGODB_CONNECT_STRING is not set".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_message_prefix() {
        let error = AppError::DatabaseError("connection refused".to_string());

        assert_eq!(error.to_string(), "Database error: connection refused");
    }
}
