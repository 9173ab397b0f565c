//! 테스트용 인메모리 [`UserStore`]
//!
//! MongoDB의 동등 비교, `update_one`, `delete_many` 의미를 흉내냅니다.

use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::users::{NewUser, UpdateOutcome, User, UserFields, UserFilter};
use crate::errors::AppResult;
use super::UserStore;

#[derive(Default)]
pub(crate) struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub(crate) fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

fn matches(filter: &UserFilter, user: &User) -> bool {
    let fields = &filter.fields;

    filter.id.as_ref().is_none_or(|id| user.id_string().as_deref() == Some(id.as_str()))
        && fields.name.as_ref().is_none_or(|name| *name == user.name)
        && fields.age.is_none_or(|age| age == user.age)
        && fields.email.as_ref().is_none_or(|email| *email == user.email)
        && fields.phone_number.is_none_or(|phone| Some(phone) == user.phone_number)
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut user = new_user.into_user()?;
        user.id = Some(ObjectId::new());

        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find(&self, filter: &UserFilter) -> AppResult<Vec<User>> {
        let users = self.users.lock().unwrap();

        Ok(users.iter().filter(|user| matches(filter, user)).cloned().collect())
    }

    async fn update_by_filter(&self, filter: &UserFilter, update: &UserFields) -> AppResult<UpdateOutcome> {
        let mut users = self.users.lock().unwrap();

        let Some(user) = users.iter_mut().find(|user| matches(filter, user)) else {
            return Ok(UpdateOutcome::default());
        };

        let before = user.clone();
        if let Some(name) = &update.name {
            user.name = name.clone();
        }
        if let Some(age) = update.age {
            user.age = age;
        }
        if let Some(email) = &update.email {
            user.email = email.clone();
        }
        if let Some(phone_number) = update.phone_number {
            user.phone_number = Some(phone_number);
        }

        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: u64::from(*user != before),
        })
    }

    async fn delete_by_condition(&self, condition: &UserFilter) -> AppResult<u64> {
        let mut users = self.users.lock().unwrap();

        let before = users.len();
        users.retain(|user| !matches(condition, user));
        Ok((before - users.len()) as u64)
    }
}
