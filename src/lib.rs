//! 사용자 CRUD 서비스
//!
//! 쿼리 문자열 파라미터를 MongoDB 필터/업데이트로 변환하여 `users` 컬렉션에 대한
//! 생성, 조회, 수정, 삭제를 제공하는 얇은 HTTP 서비스입니다.
//!
//! # Features
//!
//! - **GET 기반 CRUD**: `/create`, `/retrieve`, `/update`, `/delete`
//! - **라우트별 파라미터 고정**: 인식하지 않는 파라미터는 400으로 거부
//! - **명시적 의존성 주입**: 저장소를 `web::Data<dyn UserStore>`로 전달
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /create /retrieve /update /delete /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 쿼리 파라미터 → 필터/업데이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore (단일 왕복)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← users 컬렉션
//! └─────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod routes;
pub mod handlers;
pub mod errors;
