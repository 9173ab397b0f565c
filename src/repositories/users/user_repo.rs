//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 MongoDB 기반 [`UserStore`] 구현입니다.
//!
//! ## 특징
//!
//! - **명시적 의존성 주입**: `main`에서 생성한 [`Database`] 핸들로부터 컬렉션을 얻습니다
//! - **단일 왕복**: 모든 연산은 MongoDB 명령 하나로 끝나며 재시도하지 않습니다
//! - **스키마 검증**: 생성 시 필수 필드(`name`, `age`, `email`)를 저장 직전에 검증합니다

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info, warn};
use mongodb::{bson::doc, Collection};
use crate::{
    config::USERS_COLLECTION,
    db::Database,
    domain::entities::users::{NewUser, UpdateOutcome, User, UserFields, UserFilter},
    errors::{AppError, AppResult},
};
use super::UserStore;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **ValidationError**: 생성 시 필수 필드 누락
/// - **DatabaseError**: MongoDB 연결 오류, 명령 실행 오류
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(&database);
///
/// let created = repo.create(NewUser {
///     name: Some("Ann".to_string()),
///     age: Some(30.0),
///     email: Some("ann@x.com".to_string()),
///     phone_number: None,
/// }).await?;
///
/// let id = created.id_string().unwrap_or_default();
/// let found = repo.find(&UserFilter::by_id(&id)).await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut user = new_user.into_user()?;

        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(format!("예상하지 못한 _id 타입: {}", result.inserted_id))
        })?;
        user.id = Some(id);

        info!("사용자 생성: {}", id.to_hex());

        Ok(user)
    }

    async fn find(&self, filter: &UserFilter) -> AppResult<Vec<User>> {
        let filter = filter.to_document();
        debug!("사용자 조회: {}", filter);

        let cursor = self.collection
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect::<Vec<User>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update_by_filter(&self, filter: &UserFilter, update: &UserFields) -> AppResult<UpdateOutcome> {
        let filter = filter.to_document();

        // 빈 $set은 서버가 거부하므로 일치 여부만 확인
        if update.is_empty() {
            let matched_count = self.collection
                .count_documents(filter)
                .limit(1)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            return Ok(UpdateOutcome {
                matched_count,
                modified_count: 0,
            });
        }

        let result = self.collection
            .update_one(filter, doc! { "$set": update.to_document() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        debug!(
            "사용자 업데이트: matched={}, modified={}",
            result.matched_count, result.modified_count
        );

        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_by_condition(&self, condition: &UserFilter) -> AppResult<u64> {
        if condition.is_empty() {
            warn!("⚠️ 삭제 조건이 비어 있습니다. {} 컬렉션의 모든 문서를 삭제합니다", USERS_COLLECTION);
        }

        let result = self.collection
            .delete_many(condition.to_document())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("사용자 삭제: {}건", result.deleted_count);

        Ok(result.deleted_count)
    }
}
