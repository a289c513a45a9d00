//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 시작 시점에 한 번 읽어 [`AppConfig`]로 묶고,
//! 각 서비스는 자신에게 필요한 설정 구조체만 주입받습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//! - [`auth_config`] - JWT, Google 로그인 관련 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use storefront_backend::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Server will bind to {}", config.server.bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export JWT_SECRET="your-super-secret-key"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export PORT="5000"
//! export CLIENT_URL="http://localhost:3000"
//! export JWT_EXPIRES_IN="7d"
//! export GOOGLE_CLIENT_ID="your-client-id"
//! export BCRYPT_COST="12"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use thiserror::Error;

/// 설정 로딩 에러
///
/// 요청 처리 중이 아니라 시작 시점에만 발생하므로 `AppError`와 분리합니다.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub rate_limit: RateLimitConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub google: GoogleOAuthConfig,
}

impl AppConfig {
    /// 현재 프로세스의 환경 변수에서 전체 설정을 읽어옵니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::current();

        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(&environment),
            cors: CorsConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
            jwt: JwtConfig::from_env(&environment)?,
            password: PasswordConfig::from_env(&environment),
            google: GoogleOAuthConfig::from_env(),
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::Missing("JWT_SECRET").to_string(),
            "Missing required environment variable: JWT_SECRET"
        );
        assert_eq!(
            ConfigError::Invalid { key: "JWT_EXPIRES_IN", value: "soon".into() }.to_string(),
            "Invalid value for JWT_EXPIRES_IN: soon"
        );
    }
}
