use serde::{Serialize, Serializer};
use crate::domain::entities::users::{UpdateOutcome, User};

/// 사용자 JSON 응답
///
/// `_id`는 16진수 문자열 `id`로 노출합니다.
/// 숫자 필드는 정수 값이면 `30`, 아니면 `30.5`처럼 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "serialize_number")]
    pub age: f64,
    pub email: String,
    #[serde(
        rename = "phoneNumber",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_number"
    )]
    pub phone_number: Option<f64>,
}

/// 2^53: f64가 모든 정수를 정확히 표현하는 한계
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn serialize_optional_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serialize_number(value, serializer),
        None => serializer.serialize_none(),
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            age,
            email,
            phone_number,
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            age,
            email,
            phone_number,
        }
    }
}

/// `/update` 응답
///
/// 일치하는 문서가 없어도 HTTP 200과 함께 `{"Error": "Not found"}`를 돌려줍니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UpdateResponse {
    Updated {
        #[serde(rename = "updateCount")]
        update_count: u64,
    },
    NotFound {
        #[serde(rename = "Error")]
        error: String,
    },
}

impl From<UpdateOutcome> for UpdateResponse {
    fn from(outcome: UpdateOutcome) -> Self {
        if !outcome.is_matched() {
            return UpdateResponse::NotFound {
                error: "Not found".to_string(),
            };
        }

        // 단일 문서 업데이트에서 matched = 1 이므로 (matched + modified - 1) == modified
        UpdateResponse::Updated {
            update_count: outcome.modified_count,
        }
    }
}

/// `/delete` 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteResponse {
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}
