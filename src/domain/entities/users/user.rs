//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서와, 저장소 계층에 전달되는
//! 필터/업데이트 값 타입을 정의합니다.

use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::errors::{AppError, AppResult};

/// 사용자 엔티티
///
/// `age`와 `phoneNumber`는 BSON double로 저장됩니다. 읽을 때는 Int32/Int64로
/// 저장된 문서도 그대로 받아들입니다. `phoneNumber`는 값이 있을 때만 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: f64,
    pub email: String,
    #[serde(rename = "phoneNumber", default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<f64>,
}

impl User {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

/// 요청에서 인식하는 사용자 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Age,
    Email,
    PhoneNumber,
    Id,
}

impl UserField {
    /// 삭제 조건으로 사용할 필드를 고르는 고정 우선순위
    pub const DELETE_PRIORITY: [UserField; 5] = [
        UserField::Name,
        UserField::Age,
        UserField::Email,
        UserField::PhoneNumber,
        UserField::Id,
    ];

    /// MongoDB 문서에서의 키 이름
    pub const fn key(self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Age => "age",
            UserField::Email => "email",
            UserField::PhoneNumber => "phoneNumber",
            UserField::Id => "_id",
        }
    }
}

/// `_id`를 제외한 사용자 필드 묶음
///
/// 업데이트 시에는 덮어쓸 값, 필터에서는 동등 비교 조건으로 쓰입니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFields {
    pub name: Option<String>,
    pub age: Option<f64>,
    pub email: Option<String>,
    pub phone_number: Option<f64>,
}

impl UserFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
    }

    pub fn contains(&self, field: UserField) -> bool {
        match field {
            UserField::Name => self.name.is_some(),
            UserField::Age => self.age.is_some(),
            UserField::Email => self.email.is_some(),
            UserField::PhoneNumber => self.phone_number.is_some(),
            UserField::Id => false,
        }
    }

    /// 값이 있는 필드만 담은 BSON 문서를 만듭니다.
    pub fn to_document(&self) -> Document {
        let mut document = Document::new();

        if let Some(name) = &self.name {
            document.insert(UserField::Name.key(), name.as_str());
        }
        if let Some(age) = self.age {
            document.insert(UserField::Age.key(), age);
        }
        if let Some(email) = &self.email {
            document.insert(UserField::Email.key(), email.as_str());
        }
        if let Some(phone_number) = self.phone_number {
            document.insert(UserField::PhoneNumber.key(), phone_number);
        }

        document
    }
}

/// 동등 비교 조건으로 구성된 사용자 필터
///
/// 빈 필터는 컬렉션의 모든 문서와 일치합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub id: Option<String>,
    pub fields: UserFields,
}

impl UserFilter {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            fields: UserFields::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.fields.is_empty()
    }

    pub fn contains(&self, field: UserField) -> bool {
        match field {
            UserField::Id => self.id.is_some(),
            other => self.fields.contains(other),
        }
    }

    /// 지정한 필드 하나만 남긴 필터를 반환합니다.
    pub fn only(&self, field: UserField) -> Self {
        let mut filter = Self::default();

        match field {
            UserField::Name => filter.fields.name = self.fields.name.clone(),
            UserField::Age => filter.fields.age = self.fields.age,
            UserField::Email => filter.fields.email = self.fields.email.clone(),
            UserField::PhoneNumber => filter.fields.phone_number = self.fields.phone_number,
            UserField::Id => filter.id = self.id.clone(),
        }

        filter
    }

    /// `priority` 순서에서 처음으로 값이 있는 필드 하나만 남깁니다.
    ///
    /// 아무 필드도 없으면 빈 필터를 반환합니다.
    pub fn first_present(&self, priority: &[UserField]) -> Self {
        priority
            .iter()
            .copied()
            .find(|field| self.contains(*field))
            .map(|field| self.only(field))
            .unwrap_or_default()
    }

    pub fn to_document(&self) -> Document {
        let mut document = self.fields.to_document();

        if let Some(id) = &self.id {
            document.insert(UserField::Id.key(), id_value(id));
        }

        document
    }
}

/// `_id` 비교 값
///
/// ObjectId 형식이 아니면 문자열 그대로 비교하므로 어떤 문서와도 일치하지 않습니다.
pub fn id_value(id: &str) -> Bson {
    ObjectId::parse_str(id)
        .map(Bson::ObjectId)
        .unwrap_or_else(|_| Bson::String(id.to_string()))
}

/// 단일 문서 업데이트 결과
///
/// 필터와 일치한 문서 수와 실제 값이 바뀐 문서 수를 따로 보고합니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateOutcome {
    pub fn is_matched(&self) -> bool {
        self.matched_count > 0
    }
}

/// 생성 요청으로 들어온 사용자 필드
///
/// `name`, `age`, `email`은 필수이며 저장 직전에 검증됩니다.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct NewUser {
    #[validate(required(message = "name is required"))]
    pub name: Option<String>,
    #[validate(required(message = "age is required"))]
    pub age: Option<f64>,
    #[validate(required(message = "email is required"))]
    pub email: Option<String>,
    pub phone_number: Option<f64>,
}

impl NewUser {
    /// 필수 필드를 검증하고 저장 가능한 [`User`]로 변환합니다.
    pub fn into_user(self) -> AppResult<User> {
        self.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let (Some(name), Some(age), Some(email)) = (self.name, self.age, self.email) else {
            return Err(AppError::ValidationError("name, age, email are required".to_string()));
        };

        Ok(User {
            id: None,
            name,
            age,
            email,
            phone_number: self.phone_number,
        })
    }
}
