//! 애플리케이션 전역 에러 모듈
//!
//! [`AppError`](errors::AppError)와 [`AppResult`](errors::AppResult)를 재export 합니다.

pub mod errors;

pub use errors::*;
