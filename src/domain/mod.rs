//! # Domain Layer
//!
//! - [`entities`] - 저장소에 매핑되는 엔티티와 필터 타입
//! - [`dto`] - HTTP 쿼리 파라미터와 JSON 응답 타입

pub mod entities;
pub mod dto;
