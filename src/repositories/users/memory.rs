//! 테스트용 메모리 사용자 저장소

use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::users::User;
use crate::errors::AppError;
use super::{UserStore, DUPLICATE_EMAIL_MESSAGE};

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    /// 사용자 삭제 (계정 삭제 후 토큰 사용 시나리오용)
    pub fn remove(&self, id: &ObjectId) {
        if let Ok(mut users) = self.users.write() {
            users.retain(|user| user.id.as_ref() != Some(id));
        }
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or_default()
    }

    fn find_first(&self, predicate: impl Fn(&User) -> bool) -> Option<User> {
        self.users
            .read()
            .ok()
            .and_then(|users| users.iter().find(|user| predicate(user)).cloned())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        Ok(self.find_first(|user| user.id == Some(object_id)))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.find_first(|user| user.email == email))
    }

    async fn find_by_email_or_google_id(&self, email: &str, google_id: &str) -> Result<Option<User>, AppError> {
        Ok(self.find_first(|user| user.email == email || user.google_id.as_deref() == Some(google_id)))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        if users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::BadRequest(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }
}
