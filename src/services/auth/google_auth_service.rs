//! # Google 로그인 서비스
//!
//! 클라이언트가 Google Identity Services에서 받은 ID 토큰을 검증합니다.
//!
//! ## 검증 흐름
//!
//! ```text
//! 클라이언트 ── POST /api/auth/google { token } ──► 서버
//!                                                   │ GET tokeninfo?id_token=...
//!                                                   ├──────────────────────────► Google
//!                                                   │◄──────────────────────────┤ { iss, aud, sub, email, name }
//!                                                   │ aud == GOOGLE_CLIENT_ID, iss ∈ Google 발급자
//!                                                   ▼
//!                                            GoogleIdentity
//! ```
//!
//! 서명과 만료 검증은 Google `tokeninfo` 엔드포인트가 수행하며,
//! 서버는 응답의 발급 대상(`aud`)과 발급자(`iss`), 이메일 인증 여부(`email_verified`)를 확인합니다.

use async_trait::async_trait;
use crate::{
    config::GoogleOAuthConfig,
    domain::models::oauth::{GoogleIdentity, GoogleTokenInfo, GOOGLE_ISSUERS},
    errors::AppError,
};

const INVALID_GOOGLE_TOKEN: &str = "Invalid Google token";

/// Google ID 토큰 검증 인터페이스
///
/// 테스트에서는 네트워크 없이 동작하는 구현으로 교체됩니다.
#[async_trait]
pub trait IdTokenVerifier: Send + Sync {
    async fn verify(&self, id_token: &str) -> Result<GoogleIdentity, AppError>;
}

/// Google `tokeninfo` 기반 ID 토큰 검증 서비스
#[derive(Clone)]
pub struct GoogleAuthService {
    config: GoogleOAuthConfig,
    http: reqwest::Client,
}

impl GoogleAuthService {
    pub fn new(config: GoogleOAuthConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    async fn fetch_token_info(&self, id_token: &str) -> Result<GoogleTokenInfo, AppError> {
        let response = self.http
            .get(&self.config.tokeninfo_uri)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google tokeninfo 요청 실패: {}", e)))?;

        if response.status().is_client_error() {
            log::warn!("Google ID 토큰 거부됨: {}", response.status());
            return Err(AppError::AuthenticationError(INVALID_GOOGLE_TOKEN.to_string()));
        }

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google tokeninfo 응답 오류: {}", error_text
            )));
        }

        response
            .json::<GoogleTokenInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google tokeninfo 파싱 실패: {}", e)))
    }
}

#[async_trait]
impl IdTokenVerifier for GoogleAuthService {
    async fn verify(&self, id_token: &str) -> Result<GoogleIdentity, AppError> {
        let client_id = self.config.client_id.as_deref().ok_or_else(|| {
            AppError::InternalError("GOOGLE_CLIENT_ID is not configured".to_string())
        })?;

        let token_info = self.fetch_token_info(id_token).await?;
        validate_claims(token_info, client_id)
    }
}

/// `tokeninfo` 응답을 검증하여 [`GoogleIdentity`]로 변환합니다.
///
/// 이메일이 인증된(`email_verified == "true"`) 계정만 허용합니다.
/// 이름이 없는 계정은 이메일의 로컬 파트를 이름으로 사용합니다.
pub fn validate_claims(info: GoogleTokenInfo, client_id: &str) -> Result<GoogleIdentity, AppError> {
    if info.aud != client_id {
        log::warn!("Google ID 토큰 audience 불일치: {}", info.aud);
        return Err(AppError::AuthenticationError(INVALID_GOOGLE_TOKEN.to_string()));
    }

    if !GOOGLE_ISSUERS.contains(&info.iss.as_str()) {
        log::warn!("Google ID 토큰 issuer 불일치: {}", info.iss);
        return Err(AppError::AuthenticationError(INVALID_GOOGLE_TOKEN.to_string()));
    }

    if info.email_verified.as_deref() != Some("true") {
        log::warn!("Google ID 토큰 이메일 미인증: sub={}", info.sub);
        return Err(AppError::AuthenticationError(INVALID_GOOGLE_TOKEN.to_string()));
    }

    let email = info
        .email
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| AppError::AuthenticationError("Google account has no email address".to_string()))?;

    let name = info
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

    Ok(GoogleIdentity {
        google_id: info.sub,
        email,
        name,
    })
}

/// 미리 등록된 토큰만 인정하는 테스트용 검증기
#[cfg(test)]
#[derive(Default)]
pub struct StaticIdTokenVerifier {
    identities: std::collections::HashMap<String, GoogleIdentity>,
}

#[cfg(test)]
impl StaticIdTokenVerifier {
    pub fn with_token(mut self, token: &str, identity: GoogleIdentity) -> Self {
        self.identities.insert(token.to_string(), identity);
        self
    }
}

#[cfg(test)]
#[async_trait]
impl IdTokenVerifier for StaticIdTokenVerifier {
    async fn verify(&self, id_token: &str) -> Result<GoogleIdentity, AppError> {
        self.identities
            .get(id_token)
            .cloned()
            .ok_or_else(|| AppError::AuthenticationError(INVALID_GOOGLE_TOKEN.to_string()))
    }
}
