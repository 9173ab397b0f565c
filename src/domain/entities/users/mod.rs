//! Users Entity Module
//!
//! 사용자 도메인의 엔티티와 필터/업데이트 값 타입을 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{UserField, UserFilter};
//!
//! let filter = UserFilter::by_id("507f1f77bcf86cd799439011");
//! let condition = filter.first_present(&UserField::DELETE_PRIORITY);
//! ```

pub mod user;

pub use user::*;
