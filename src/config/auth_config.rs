//! # Authentication Configuration Module
//!
//! JWT 토큰과 Google 로그인 등 인증 관련 설정을 관리하는 모듈입니다.
//! 설정 구조체는 시작 시점에 한 번 생성되어 `TokenService`, `GoogleAuthService`에
//! 명시적으로 주입됩니다. 전역 클라이언트나 매 호출마다 환경 변수를 읽는 방식은 사용하지 않습니다.
//!
//! ## 환경 변수
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRES_IN="7d"        # 7d, 12h, 30m, 45s 또는 초 단위 숫자
//! ```
//!
//! ### Google 로그인 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_TOKENINFO_URI="https://oauth2.googleapis.com/tokeninfo"  # 선택
//! ```

use std::env;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use super::{ConfigError, Environment};

const DEFAULT_JWT_SECRET: &str = "storefront-development-secret";
const DEFAULT_TOKENINFO_URI: &str = "https://oauth2.googleapis.com/tokeninfo";

/// JWT 서명 및 만료 설정
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256 서명 키
    pub secret: String,
    /// 토큰 유효 기간
    pub expires_in: Duration,
}

impl JwtConfig {
    /// 환경 변수에서 JWT 설정을 읽어옵니다.
    ///
    /// 프로덕션 환경에서 `JWT_SECRET`이 없으면 에러를 반환하고,
    /// 그 외 환경에서는 경고 로그와 함께 개발용 기본값을 사용합니다.
    pub fn from_env(environment: &Environment) -> Result<Self, ConfigError> {
        let secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ if environment.is_production() => {
                return Err(ConfigError::Missing("JWT_SECRET"));
            }
            _ => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                DEFAULT_JWT_SECRET.to_string()
            }
        };

        let expires_in = match env::var("JWT_EXPIRES_IN") {
            Ok(raw) => parse_expires_in(&raw).ok_or_else(|| ConfigError::Invalid {
                key: "JWT_EXPIRES_IN",
                value: raw.clone(),
            })?,
            Err(_) => Duration::days(7),
        };

        Ok(Self { secret, expires_in })
    }
}

/// `7d`, `12h`, `30m`, `45s` 형식 또는 초 단위 숫자를 `Duration`으로 변환합니다.
///
/// 0 이하의 값이나 알 수 없는 단위는 `None`을 반환합니다.
pub fn parse_expires_in(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let (number, unit) = match raw.char_indices().last() {
        Some((idx, c)) if c.is_ascii_alphabetic() => (&raw[..idx], c.to_ascii_lowercase()),
        Some(_) => (raw, 's'),
        None => return None,
    };

    let amount: i64 = number.trim().parse().ok().filter(|n| *n > 0)?;

    match unit {
        's' => Some(Duration::seconds(amount)),
        'm' => Some(Duration::minutes(amount)),
        'h' => Some(Duration::hours(amount)),
        'd' => Some(Duration::days(amount)),
        _ => None,
    }
}

/// Google ID 토큰 검증 설정
#[derive(Debug, Clone)]
pub struct GoogleOAuthConfig {
    /// OAuth 클라이언트 ID. ID 토큰의 `aud` 클레임과 일치해야 합니다.
    /// 설정되지 않은 경우 Google 로그인은 비활성화됩니다.
    pub client_id: Option<String>,
    /// Google tokeninfo 엔드포인트
    pub tokeninfo_uri: String,
}

impl GoogleOAuthConfig {
    pub fn from_env() -> Self {
        let client_id = env::var("GOOGLE_CLIENT_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        if client_id.is_none() {
            log::warn!("GOOGLE_CLIENT_ID not set, Google sign-in is disabled");
        }

        Self {
            client_id,
            tokeninfo_uri: env::var("GOOGLE_TOKENINFO_URI")
                .unwrap_or_else(|_| DEFAULT_TOKENINFO_URI.to_string()),
        }
    }
}

/// 사용자 계정의 가입 경로
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Local,
    Google,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
        }
    }
}
