//! # 사용자 관리 서비스 구현
//!
//! 회원가입, 로그인, Google 계정 연결, 사용자 조회를 담당합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                      UserService                      │
//! │                                                       │
//! │  register ─────► 검증 → 중복 확인 → bcrypt → 저장       │
//! │  login ────────► 검증 → 조회 → bcrypt verify            │
//! │  google ───────► 이메일/googleId 조회 → 없으면 생성       │
//! │  get_user ─────► ID 조회                               │
//! └───────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//!              dyn UserStore (MongoDB / 메모리)
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: [`PasswordConfig`]의 환경별 cost 사용
//! - **동일한 실패 메시지**: 없는 이메일과 틀린 비밀번호 모두 "Incorrect email or password"
//! - **이메일 정규화**: 저장과 조회 모두 소문자 이메일 사용

use std::sync::Arc;
use bcrypt::{hash, verify};
use uuid::Uuid;
use validator::Validate;
use crate::{
    config::PasswordConfig,
    domain::{
        dto::users::request::{LoginRequest, RegisterRequest},
        entities::users::User,
        models::oauth::GoogleIdentity,
    },
    errors::{AppError, ErrorContext},
    repositories::users::{UserStore, DUPLICATE_EMAIL_MESSAGE},
    utils::string_utils::normalize_email,
};

const INCORRECT_CREDENTIALS: &str = "Incorrect email or password";

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소는 `Arc<dyn UserStore>`로 주입되어 운영에서는 MongoDB,
/// 테스트에서는 메모리 구현을 사용합니다.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    password: PasswordConfig,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, password: PasswordConfig) -> Self {
        Self { store, password }
    }

    /// 이메일/비밀번호 회원가입
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 입력값 검증 실패 (필드별 메시지 목록)
    /// * `AppError::BadRequest` - 이미 가입된 이메일
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let user = state.users.register(request).await?;
    /// let token = state.tokens.generate_token(&user)?;
    /// ```
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AppError> {
        request.validate()?;

        let email = normalize_email(&request.email);

        if self.store.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }

        let start_time = std::time::Instant::now();
        let password_hash = self.hash_password(&request.password)?;
        log::debug!("Password hashing took: {:?}", start_time.elapsed());

        let user = User::new_local(request.name.trim().to_string(), email, password_hash);
        let created_user = self.store.create(user).await?;

        log::info!("✅ 신규 사용자 가입: {}", created_user.email);
        Ok(created_user)
    }

    /// 이메일/비밀번호 로그인
    ///
    /// 이메일이 없거나 비밀번호가 틀리면 같은 401 메시지를 반환합니다.
    pub async fn login(&self, request: LoginRequest) -> Result<User, AppError> {
        request.validate()?;

        let email = normalize_email(&request.email);

        let Some(user) = self.store.find_by_email(&email).await? else {
            log::warn!("로그인 실패 (미가입 이메일): {}", email);
            return Err(AppError::AuthenticationError(INCORRECT_CREDENTIALS.to_string()));
        };

        let is_valid = verify(&request.password, &user.password)
            .context("비밀번호 검증 실패")?;

        if !is_valid {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", email);
            return Err(AppError::AuthenticationError(INCORRECT_CREDENTIALS.to_string()));
        }

        Ok(user)
    }

    /// 검증된 Google 신원으로 사용자를 조회하거나 생성합니다.
    ///
    /// 이메일 또는 Google ID가 일치하는 기존 계정이 있으면 그대로 반환합니다.
    /// 새 계정에는 로그인에 쓰이지 않는 임의 비밀번호(UUID v4)의 해시를 저장합니다.
    pub async fn find_or_create_google_user(&self, identity: GoogleIdentity) -> Result<User, AppError> {
        let email = normalize_email(&identity.email);

        if let Some(user) = self
            .store
            .find_by_email_or_google_id(&email, &identity.google_id)
            .await?
        {
            return Ok(user);
        }

        let random_password = Uuid::new_v4().to_string();
        let password_hash = self.hash_password(&random_password)?;

        let user = User::new_google(identity.name, email, identity.google_id, password_hash);
        let created_user = self.store.create(user).await?;

        log::info!("✅ Google 계정으로 신규 사용자 생성: {}", created_user.email);
        Ok(created_user)
    }

    /// ID로 사용자 조회
    ///
    /// 형식이 잘못된 ID도 존재하지 않는 사용자로 취급합니다.
    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    fn hash_password(&self, password: &str) -> Result<String, AppError> {
        hash(password, self.password.bcrypt_cost).context("비밀번호 해싱 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::memory::InMemoryUserStore;

    fn service() -> (UserService, Arc<InMemoryUserStore>) {
        let store = Arc::new(InMemoryUserStore::default());
        let service = UserService::new(store.clone(), PasswordConfig { bcrypt_cost: 4 });
        (service, store)
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Jane Doe".to_string(),
            email: email.to_string(),
            password: "Secret123".to_string(),
        }
    }

    fn google_identity(email: &str) -> GoogleIdentity {
        GoogleIdentity {
            google_id: "google-sub-1".to_string(),
            email: email.to_string(),
            name: "Jane Doe".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_hashes_password_and_normalizes_email() {
        let (service, _) = service();

        let user = service.register(register_request("Jane@Example.COM")).await.unwrap();

        assert!(user.id.is_some());
        assert_eq!(user.email, "jane@example.com");
        assert_ne!(user.password, "Secret123");
        assert!(verify("Secret123", &user.password).unwrap());
    }

    #[actix_web::test]
    async fn test_register_duplicate_email() {
        let (service, store) = service();
        service.register(register_request("jane@example.com")).await.unwrap();

        let result = service.register(register_request("JANE@example.com")).await;

        match result {
            Err(AppError::BadRequest(message)) => assert_eq!(message, DUPLICATE_EMAIL_MESSAGE),
            other => panic!("unexpected result: {:?}", other.map(|u| u.email)),
        }
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_register_validation_errors() {
        let (service, store) = service();
        let request = RegisterRequest {
            name: "J".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };

        let Err(AppError::ValidationError(messages)) = service.register(request).await else {
            panic!("expected validation error");
        };

        assert!(messages.contains(&"Please provide a valid email address".to_string()));
        assert!(messages.contains(&"Name must be between 2 and 50 characters".to_string()));
        assert_eq!(store.len(), 0);
    }

    #[actix_web::test]
    async fn test_register_blank_name_is_not_stored() {
        let (service, store) = service();
        let request = RegisterRequest { name: "   ".to_string(), ..register_request("jane@example.com") };

        let Err(AppError::ValidationError(messages)) = service.register(request).await else {
            panic!("expected validation error");
        };

        assert_eq!(messages, vec!["Name must be between 2 and 50 characters".to_string()]);
        assert_eq!(store.len(), 0);
    }

    #[actix_web::test]
    async fn test_register_trims_name() {
        let (service, _) = service();
        let request = RegisterRequest { name: "  Jane Doe ".to_string(), ..register_request("jane@example.com") };

        let user = service.register(request).await.unwrap();

        assert_eq!(user.name, "Jane Doe");
    }

    #[actix_web::test]
    async fn test_login_success_and_failures() {
        let (service, _) = service();
        service.register(register_request("jane@example.com")).await.unwrap();

        let user = service
            .login(LoginRequest { email: "JANE@example.com".into(), password: "Secret123".into() })
            .await
            .unwrap();
        assert_eq!(user.name, "Jane Doe");

        for (email, password) in [("jane@example.com", "Wrong123"), ("nobody@example.com", "Secret123")] {
            let result = service
                .login(LoginRequest { email: email.into(), password: password.into() })
                .await;
            match result {
                Err(AppError::AuthenticationError(message)) => assert_eq!(message, INCORRECT_CREDENTIALS),
                other => panic!("unexpected result: {:?}", other.map(|u| u.email)),
            }
        }
    }

    #[actix_web::test]
    async fn test_login_requires_password() {
        let (service, _) = service();

        let result = service
            .login(LoginRequest { email: "jane@example.com".into(), password: String::new() })
            .await;

        assert!(matches!(
            result,
            Err(AppError::ValidationError(messages)) if messages == vec!["Password is required".to_string()]
        ));
    }

    #[actix_web::test]
    async fn test_google_user_created_once() {
        let (service, store) = service();

        let first = service.find_or_create_google_user(google_identity("Jane@Gmail.com")).await.unwrap();
        let second = service.find_or_create_google_user(google_identity("jane@gmail.com")).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.google_id.as_deref(), Some("google-sub-1"));
        assert_eq!(first.email, "jane@gmail.com");
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_google_sign_in_reuses_local_account() {
        let (service, store) = service();
        let local = service.register(register_request("jane@gmail.com")).await.unwrap();

        let user = service.find_or_create_google_user(google_identity("jane@gmail.com")).await.unwrap();

        assert_eq!(user.id, local.id);
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_get_user_not_found() {
        let (service, _) = service();

        assert!(matches!(service.get_user("not-an-object-id").await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.get_user(&mongodb::bson::oid::ObjectId::new().to_hex()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
