//! JWT 토큰 관리 서비스 구현
//!
//! HS256 서명 JWT의 생성과 검증을 담당합니다.
//! 서명 키와 만료 기간은 [`JwtConfig`]로 주입됩니다.

use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::JwtConfig,
    domain::{entities::users::User, models::token::TokenClaims},
    errors::AppError,
};

/// JWT 토큰 관리 서비스
#[derive(Clone)]
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// 사용자를 위한 JWT 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장되지 않아 ID가 없는 사용자, 또는 인코딩 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = state.tokens.generate_token(&user)?;
    /// ```
    pub fn generate_token(&self, user: &User) -> Result<String, AppError> {
        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("Cannot issue a token for an unsaved user".to_string())
        })?;

        self.generate_token_for(&user_id)
    }

    fn generate_token_for(&self, user_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.config.expires_in).timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.config.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::TokenExpired` - 만료된 토큰
    /// * `AppError::InvalidToken` - 서명 불일치, 형식 오류 등 그 외 모든 실패
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.config.secret.as_bytes());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => {
                    log::debug!("JWT 검증 실패: {}", e);
                    AppError::InvalidToken
                }
            })
    }
}

/// `Authorization` 헤더 값에서 Bearer 토큰 부분만 추출합니다.
///
/// 형식이 맞지 않거나 토큰이 비어 있으면 `None`을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
/// assert_eq!(extract_bearer_token("Basic dXNlcg=="), None);
/// ```
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use mongodb::bson::oid::ObjectId;

    fn service(secret: &str) -> TokenService {
        TokenService::new(JwtConfig {
            secret: secret.to_string(),
            expires_in: Duration::days(7),
        })
    }

    fn saved_user() -> User {
        let mut user = User::new_local("Jane Doe".into(), "jane@example.com".into(), "hash".into());
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_generate_and_verify_roundtrip() {
        let tokens = service("test-secret");
        let user = saved_user();

        let token = tokens.generate_token(&user).unwrap();
        let claims = tokens.verify_token(&token).unwrap();

        assert_eq!(Some(claims.sub), user.id_string());
        assert_eq!(claims.exp - claims.iat, Duration::days(7).num_seconds());
    }

    #[test]
    fn test_unsaved_user_cannot_get_token() {
        let user = User::new_local("Jane Doe".into(), "jane@example.com".into(), "hash".into());
        assert!(matches!(
            service("test-secret").generate_token(&user),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_wrong_secret_is_invalid_token() {
        let token = service("secret-a").generate_token(&saved_user()).unwrap();
        assert!(matches!(service("secret-b").verify_token(&token), Err(AppError::InvalidToken)));
        assert!(matches!(service("secret-a").verify_token("garbage"), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_expired_token() {
        let tokens = TokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expires_in: Duration::hours(-2),
        });
        let token = tokens.generate_token(&saved_user()).unwrap();

        assert!(matches!(tokens.verify_token(&token), Err(AppError::TokenExpired)));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(extract_bearer_token("abc.def.ghi"), None);
    }
}
