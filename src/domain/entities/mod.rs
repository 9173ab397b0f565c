//! 도메인 엔티티 모듈
//!
//! MongoDB 컬렉션에 매핑되는 엔티티를 정의합니다.

pub mod users;
