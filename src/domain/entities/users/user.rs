//! User Entity Implementation
//!
//! 이메일/비밀번호 계정과 Google 계정을 하나의 모델로 표현합니다.
//! Google로 가입한 사용자도 임의 생성된 비밀번호 해시를 가지므로 `password`는 항상 존재합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (unique, 소문자로 저장)
    pub email: String,
    /// bcrypt 해시된 비밀번호. 클라이언트 응답에는 절대 포함되지 않습니다.
    pub password: String,
    /// Google 계정 식별자 (`sub` 클레임). sparse 인덱스를 위해 없으면 필드 자체를 생략합니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/패스워드)
    pub fn new_local(name: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password: password_hash,
            google_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 Google 사용자 생성
    pub fn new_google(name: String, email: String, google_id: String, password_hash: String) -> Self {
        Self {
            google_id: Some(google_id),
            ..Self::new_local(name, email, password_hash)
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 가입 경로
    pub fn auth_provider(&self) -> AuthProvider {
        match self.google_id {
            Some(_) => AuthProvider::Google,
            None => AuthProvider::Local,
        }
    }
}
