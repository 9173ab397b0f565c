//! 사용자 요청 DTO 모듈
//!
//! 라우트별 쿼리 파라미터 구조체를 제공합니다.

pub mod user_params;

pub use user_params::{CreateUserParams, DeleteUserParams, RetrieveUserParams, UpdateUserParams};
