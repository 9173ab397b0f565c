//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수 기반이며, 프로세스 시작 시 `main`에서 `.env` 파일을
//! 먼저 로드한 뒤 읽어옵니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # MongoDB (필수)
//! export MONGODB_CONNECT_STRING="mongodb://localhost:27017/users_db"
//! export DATABASE_NAME="users_db"      # 선택, 연결 문자열보다 우선
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,https://app.example.com"
//! ```

pub mod data_config;

pub use data_config::*;
