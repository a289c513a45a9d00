//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션의 데이터 액세스 계층입니다.
//!
//! ## 인덱스
//!
//! - `email_unique`: `email` 유니크 인덱스. 동시 가입 요청의 중복도 DB 수준에서 차단합니다.
//! - `google_id_sparse`: `googleId` sparse 인덱스. Google 계정에만 존재하는 필드입니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{db::Database, domain::entities::users::User, errors::AppError};

pub const USERS_COLLECTION: &str = "users";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "User already exists with this email";

/// 사용자 저장소 인터페이스
///
/// 이메일은 호출하는 쪽에서 소문자로 정규화된 값을 전달합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 조회. 형식이 잘못된 ID는 `Ok(None)`입니다.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 이메일 또는 Google ID가 일치하는 사용자를 조회합니다.
    async fn find_by_email_or_google_id(&self, email: &str, google_id: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자를 저장하고 ID가 할당된 사용자를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 이미 같은 이메일이 존재하는 경우
    async fn create(&self, user: User) -> Result<User, AppError>;
}

/// MongoDB 사용자 리포지토리
#[derive(Clone)]
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    /// 사용자 컬렉션 인덱스를 생성합니다.
    ///
    /// 이미 중복 이메일이 있는 경우 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let google_id_index = IndexModel::builder()
            .keys(doc! { "googleId": 1 })
            .options(IndexOptions::builder()
                .sparse(true)
                .name("google_id_sparse".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, google_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email_or_google_id(&self, email: &str, google_id: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "$or": [{ "email": email }, { "googleId": google_id }] })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::BadRequest(DUPLICATE_EMAIL_MESSAGE.to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }
}
