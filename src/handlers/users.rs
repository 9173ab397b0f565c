//! # User HTTP Handlers
//!
//! 쿼리 문자열을 필터/업데이트로 변환해 저장소를 한 번 호출하고, 결과를 JSON으로
//! 돌려주는 핸들러들입니다. 요청 간 상태를 보관하지 않습니다.
//!
//! | 메서드 | 경로 | 저장소 연산 | 응답 |
//! |--------|------|-------------|------|
//! | `GET` | `/create` | `create` | 생성된 사용자 |
//! | `GET` | `/retrieve` | `find` | 사용자 배열 (빈 배열 가능) |
//! | `GET` | `/update` | `update_by_filter` | `{"updateCount": n}` 또는 `{"Error": "Not found"}` |
//! | `GET` | `/delete` | `delete_by_condition` | `{"deletedCount": n}` |
//!
//! ## 에러 처리
//!
//! 핸들러는 저장소 에러를 `?`로 그대로 전파합니다. [`AppError`]가 `ResponseError`를
//! 구현하므로 Actix-Web이 JSON 에러 응답으로 변환합니다.
//!
//! ```bash
//! curl "http://localhost:8080/create?name=Ann&age=30&email=ann@x.com"
//! curl "http://localhost:8080/retrieve?name=Ann"
//! curl "http://localhost:8080/update?id=507f1f77bcf86cd799439011&age=31"
//! curl "http://localhost:8080/delete?name=Ann"
//! ```

use actix_web::{get, web, HttpResponse};
use log::debug;
use validator::Validate;
use crate::domain::dto::users::request::{CreateUserParams, DeleteUserParams, RetrieveUserParams, UpdateUserParams};
use crate::domain::dto::users::response::{DeleteResponse, UpdateResponse, UserResponse};
use crate::domain::entities::users::UserFilter;
use crate::errors::AppError;
use crate::repositories::users::UserStore;

#[get("/create")]
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    params: web::Query<CreateUserParams>,
) -> Result<HttpResponse, AppError> {
    let user = store.create(params.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[get("/retrieve")]
pub async fn retrieve_users(
    store: web::Data<dyn UserStore>,
    params: web::Query<RetrieveUserParams>,
) -> Result<HttpResponse, AppError> {
    let filter = UserFilter::from(params.into_inner());
    let users = store.find(&filter).await?;

    debug!("조회 결과: {}건", users.len());

    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// `id`와 일치하는 사용자 하나를 업데이트합니다.
///
/// 일치하는 문서가 없으면 200 응답과 함께 `{"Error": "Not found"}`를 반환합니다.
#[get("/update")]
pub async fn update_user(
    store: web::Data<dyn UserStore>,
    params: web::Query<UpdateUserParams>,
) -> Result<HttpResponse, AppError> {
    params.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let (filter, update) = params.into_inner().into_parts();
    let outcome = store.update_by_filter(&filter, &update).await?;

    Ok(HttpResponse::Ok().json(UpdateResponse::from(outcome)))
}

/// 첫 번째로 주어진 파라미터 하나로 사용자를 삭제합니다.
///
/// 우선순위: `name`, `age`, `email`, `phoneNumber`, `id`.
/// 파라미터가 없으면 모든 사용자가 삭제됩니다.
#[get("/delete")]
pub async fn delete_users(
    store: web::Data<dyn UserStore>,
    params: web::Query<DeleteUserParams>,
) -> Result<HttpResponse, AppError> {
    let condition = params.into_inner().into_condition();
    let deleted_count = store.delete_by_condition(&condition).await?;

    Ok(HttpResponse::Ok().json(DeleteResponse { deleted_count }))
}
