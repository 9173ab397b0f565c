//! # Data Transfer Objects
//!
//! HTTP 계층과 저장소 계층 사이에서 값을 변환하는 타입들입니다.
//! 요청 DTO는 라우트별로 인식하는 쿼리 파라미터를 명시적으로 나열하고,
//! 응답 DTO는 JSON 응답 형태를 고정합니다.

pub mod users;

pub use users::*;
