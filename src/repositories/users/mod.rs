//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`]는 사용자 컬렉션에 대한 네 가지 연산을 정의하고,
//! [`UserRepository`](user_repo::UserRepository)가 MongoDB로 이를 구현합니다.
//! 모든 연산은 저장소와 정확히 한 번 통신하며 재시도하지 않습니다.

use async_trait::async_trait;
use crate::domain::entities::users::{NewUser, UpdateOutcome, User, UserFields, UserFilter};
use crate::errors::AppResult;

pub mod user_repo;
#[cfg(test)]
pub(crate) mod memory_repo;

pub use user_repo::UserRepository;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 필수 필드를 검증한 뒤 새 문서를 저장하고, 할당된 `_id`를 포함해 반환합니다.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// 필터의 모든 조건과 일치하는 문서를 반환합니다. 빈 필터는 전체 조회입니다.
    async fn find(&self, filter: &UserFilter) -> AppResult<Vec<User>>;

    /// 필터와 일치하는 문서 하나에 `update`의 값을 덮어씁니다.
    ///
    /// `update`가 비어 있어도 일치 여부는 `matched_count`로 보고합니다.
    async fn update_by_filter(&self, filter: &UserFilter, update: &UserFields) -> AppResult<UpdateOutcome>;

    /// 조건과 일치하는 모든 문서를 삭제하고 삭제된 수를 반환합니다.
    ///
    /// 빈 조건은 컬렉션 전체를 삭제합니다.
    async fn delete_by_condition(&self, condition: &UserFilter) -> AppResult<u64>;
}
