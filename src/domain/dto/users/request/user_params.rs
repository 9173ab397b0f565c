//! 사용자 라우트별 쿼리 파라미터 DTO
//!
//! 각 라우트가 인식하는 파라미터를 구조체 필드로 고정합니다.
//! 목록에 없는 파라미터가 들어오면 `deny_unknown_fields`로 역직렬화가 실패하고,
//! 라우트에 등록된 `QueryConfig` 에러 핸들러가 400 응답으로 변환합니다.
//!
//! `id`는 기존 클라이언트 호환을 위해 `_id`로도 받습니다. 둘 다 주어지면 `id`를
//! 사용하고 `_id`는 무시합니다.
//!
//! `age`, `phoneNumber`는 임의의 숫자(`30`, `30.5`, `3000000000`)를 받습니다.
//!
//! | 라우트 | 파라미터 |
//! |--------|----------|
//! | `/create` | `name`, `age`, `email`, `phoneNumber` |
//! | `/retrieve` | `name`, `age`, `email`, `phoneNumber`, `id` |
//! | `/update` | `id` (필수), `name`, `age`, `email`, `phoneNumber` |
//! | `/delete` | `name`, `age`, `email`, `phoneNumber`, `id` (처음 하나만 사용) |

use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::domain::entities::users::{NewUser, UserField, UserFields, UserFilter};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserParams {
    pub name: Option<String>,
    pub age: Option<f64>,
    pub email: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<f64>,
}

impl From<CreateUserParams> for NewUser {
    fn from(params: CreateUserParams) -> Self {
        Self {
            name: params.name,
            age: params.age,
            email: params.email,
            phone_number: params.phone_number,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetrieveUserParams {
    pub name: Option<String>,
    pub age: Option<f64>,
    pub email: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<f64>,
    pub id: Option<String>,
    #[serde(rename = "_id")]
    pub underscore_id: Option<String>,
}

impl From<RetrieveUserParams> for UserFilter {
    fn from(params: RetrieveUserParams) -> Self {
        Self {
            id: params.id.or(params.underscore_id),
            fields: UserFields {
                name: params.name,
                age: params.age,
                email: params.email,
                phone_number: params.phone_number,
            },
        }
    }
}

/// 업데이트 요청 파라미터
///
/// `id`는 필터로만 쓰이고, 나머지 필드는 덮어쓸 값이 됩니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "validate_id_present"))]
pub struct UpdateUserParams {
    pub id: Option<String>,
    #[serde(rename = "_id")]
    pub underscore_id: Option<String>,
    pub name: Option<String>,
    pub age: Option<f64>,
    pub email: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<f64>,
}

impl UpdateUserParams {
    /// `(필터, 업데이트)` 쌍으로 분리합니다.
    pub fn into_parts(self) -> (UserFilter, UserFields) {
        let filter = UserFilter {
            id: self.id.or(self.underscore_id),
            fields: UserFields::default(),
        };
        let update = UserFields {
            name: self.name,
            age: self.age,
            email: self.email,
            phone_number: self.phone_number,
        };

        (filter, update)
    }
}

fn validate_id_present(params: &UpdateUserParams) -> Result<(), ValidationError> {
    if params.id.is_none() && params.underscore_id.is_none() {
        return Err(ValidationError::new("id_required")
            .with_message("id is required".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteUserParams {
    pub name: Option<String>,
    pub age: Option<f64>,
    pub email: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<f64>,
    pub id: Option<String>,
    #[serde(rename = "_id")]
    pub underscore_id: Option<String>,
}

impl DeleteUserParams {
    /// [`UserField::DELETE_PRIORITY`] 순서에서 처음 나온 파라미터 하나만 조건으로 사용합니다.
    pub fn into_condition(self) -> UserFilter {
        let filter = UserFilter {
            id: self.id.or(self.underscore_id),
            fields: UserFields {
                name: self.name,
                age: self.age,
                email: self.email,
                phone_number: self.phone_number,
            },
        };

        filter.first_present(&UserField::DELETE_PRIORITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    #[test]
    fn test_create_params_parse() {
        let params = Query::<CreateUserParams>::from_query("name=Ann&age=30&email=ann%40x.com")
            .unwrap()
            .into_inner();

        let new_user = NewUser::from(params);
        assert_eq!(new_user.name.as_deref(), Some("Ann"));
        assert_eq!(new_user.age, Some(30.0));
        assert_eq!(new_user.email.as_deref(), Some("ann@x.com"));
        assert_eq!(new_user.phone_number, None);
    }

    #[test]
    fn test_create_params_reject_id() {
        let result = Query::<CreateUserParams>::from_query("name=Ann&id=507f1f77bcf86cd799439011");
        assert!(result.is_err());
    }

    #[test]
    fn test_create_params_accept_any_number() {
        let params = Query::<CreateUserParams>::from_query("name=Ann&age=30.5&email=ann%40x.com&phoneNumber=3000000000")
            .unwrap()
            .into_inner();

        assert_eq!(params.age, Some(30.5));
        assert_eq!(params.phone_number, Some(3_000_000_000.0));
    }

    #[test]
    fn test_non_numeric_age_rejected() {
        let result = Query::<RetrieveUserParams>::from_query("age=thirty");
        assert!(result.is_err());
    }

    #[test]
    fn test_retrieve_params_accept_underscore_id() {
        let params = Query::<RetrieveUserParams>::from_query("_id=507f1f77bcf86cd799439011&phoneNumber=5551234")
            .unwrap()
            .into_inner();

        let filter = UserFilter::from(params);
        assert_eq!(filter.id.as_deref(), Some("507f1f77bcf86cd799439011"));
        assert_eq!(filter.fields.phone_number, Some(5551234.0));
    }

    #[test]
    fn test_id_takes_precedence_over_underscore_id() {
        let params = Query::<RetrieveUserParams>::from_query("id=abc&_id=def")
            .unwrap()
            .into_inner();
        assert_eq!(UserFilter::from(params), UserFilter::by_id("abc"));

        let params = Query::<DeleteUserParams>::from_query("_id=def&id=abc")
            .unwrap()
            .into_inner();
        assert_eq!(params.into_condition(), UserFilter::by_id("abc"));
    }

    #[test]
    fn test_update_params_accept_underscore_id() {
        let params = Query::<UpdateUserParams>::from_query("_id=def&name=Bo")
            .unwrap()
            .into_inner();
        assert!(params.validate().is_ok());

        let (filter, _) = params.into_parts();
        assert_eq!(filter, UserFilter::by_id("def"));
    }

    #[test]
    fn test_update_params_require_id() {
        let params = Query::<UpdateUserParams>::from_query("age=31")
            .unwrap()
            .into_inner();

        assert!(params.validate().is_err());
    }

    #[test]
    fn test_update_params_split() {
        let params = Query::<UpdateUserParams>::from_query("id=abc&age=31")
            .unwrap()
            .into_inner();
        assert!(params.validate().is_ok());

        let (filter, update) = params.into_parts();
        assert_eq!(filter, UserFilter::by_id("abc"));
        assert_eq!(update, UserFields { age: Some(31.0), ..Default::default() });
    }

    #[test]
    fn test_delete_params_use_first_present_only() {
        let params = Query::<DeleteUserParams>::from_query("id=abc&email=ann%40x.com&name=Ann")
            .unwrap()
            .into_inner();

        let condition = params.into_condition();
        assert_eq!(condition.fields.name.as_deref(), Some("Ann"));
        assert!(!condition.contains(UserField::Email));
        assert!(!condition.contains(UserField::Id));
    }

    #[test]
    fn test_delete_params_empty() {
        let params = Query::<DeleteUserParams>::from_query("").unwrap().into_inner();
        assert!(params.into_condition().is_empty());
    }
}
