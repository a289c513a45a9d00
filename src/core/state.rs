//! 애플리케이션 상태
//!
//! 설정에서 만들어진 서비스들을 하나로 묶어 actix-web에 `web::Data`로 등록합니다.
//! 모든 서비스는 불변이며 요청 간 공유됩니다.

use std::sync::Arc;
use crate::{
    config::AppConfig,
    db::Database,
    repositories::{products::MongoProductRepository, users::MongoUserRepository},
    services::{
        auth::{GoogleAuthService, IdTokenVerifier, TokenService},
        products::ProductService,
        users::UserService,
    },
};

/// 핸들러에 주입되는 서비스 묶음
#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
    pub users: UserService,
    pub tokens: TokenService,
    pub google: Arc<dyn IdTokenVerifier>,
}

impl AppState {
    /// MongoDB 저장소와 실제 Google 검증기로 상태를 조립합니다.
    pub fn from_database(config: &AppConfig, database: Arc<Database>) -> Self {
        Self {
            products: ProductService::new(Arc::new(MongoProductRepository::new(database.clone()))),
            users: UserService::new(
                Arc::new(MongoUserRepository::new(database)),
                config.password.clone(),
            ),
            tokens: TokenService::new(config.jwt.clone()),
            google: Arc::new(GoogleAuthService::new(config.google.clone())),
        }
    }
}

#[cfg(test)]
pub mod testing {
    //! 메모리 저장소 기반 테스트 상태

    use super::*;
    use chrono::Duration;
    use crate::config::{JwtConfig, PasswordConfig};
    use crate::repositories::{products::memory::InMemoryProductStore, users::memory::InMemoryUserStore};
    use crate::services::auth::StaticIdTokenVerifier;

    pub const TEST_JWT_SECRET: &str = "test-secret";

    pub fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expires_in: Duration::days(7),
        }
    }

    pub fn in_memory_state(
        products: Arc<InMemoryProductStore>,
        users: Arc<InMemoryUserStore>,
        google: StaticIdTokenVerifier,
    ) -> AppState {
        AppState {
            products: ProductService::new(products),
            users: UserService::new(users, PasswordConfig { bcrypt_cost: 4 }),
            tokens: TokenService::new(test_jwt_config()),
            google: Arc::new(google),
        }
    }
}
