//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 저장소로 사용하며, 핸들러는 [`UserStore`](users::UserStore) 트레이트를
//! 통해서만 저장소에 접근합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let user_repo = UserRepository::new(&database);
//! let users = user_repo.find(&UserFilter::default()).await?;
//! ```

pub mod users;
