//! 데이터 및 서버 설정 관리 모듈
//!
//! MongoDB 연결 정보, HTTP 서버 바인딩 주소, CORS 허용 Origin 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽어오며, 테스트를 위해 조회 함수를 주입할 수 있는
//! `*_from` 변형을 함께 제공합니다.

use std::env;
use crate::errors::{AppError, AppResult};

/// 연결 문자열에 데이터베이스 이름이 없을 때 사용하는 기본값
pub const DEFAULT_DATABASE_NAME: &str = "test";

/// 사용자 문서가 저장되는 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DataConfig {
    /// MongoDB 연결 문자열
    pub connection_string: String,
    /// `DATABASE_NAME`으로 지정한 데이터베이스 이름 (없으면 연결 문자열 기준)
    pub database_name: Option<String>,
}

impl DataConfig {
    /// 프로세스 환경 변수에서 연결 설정을 읽어옵니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_CONNECT_STRING`: 연결 문자열 (필수, `MONGODB_URI`로 대체 가능)
    /// - `DATABASE_NAME`: 데이터베이스 이름 (선택)
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connection_string = lookup("MONGODB_CONNECT_STRING")
            .or_else(|| lookup("MONGODB_URI"))
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigError("MONGODB_CONNECT_STRING 환경 변수가 설정되지 않았습니다".to_string())
            })?;

        let database_name = lookup("DATABASE_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(Self {
            connection_string,
            database_name,
        })
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        Self::port_from(env::var("PORT").ok())
    }

    pub fn port_from(value: Option<String>) -> u16 {
        value
            .and_then(|port| port.trim().parse().ok())
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

pub struct CorsConfig;

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분) 값을 읽고, 없으면 로컬 개발용 Origin을 반환합니다.
    pub fn allowed_origins() -> Vec<String> {
        Self::origins_from(env::var("CORS_ALLOWED_ORIGINS").ok())
    }

    pub fn origins_from(value: Option<String>) -> Vec<String> {
        let origins: Vec<String> = value
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            return vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ];
        }

        origins
    }
}
