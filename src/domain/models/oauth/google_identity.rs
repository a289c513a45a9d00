//! # Google ID 토큰 모델
//!
//! Google `tokeninfo` 엔드포인트 응답과, 검증을 통과한 뒤 사용하는 신원 정보입니다.
//!
//! ## API 엔드포인트
//!
//! `GET https://oauth2.googleapis.com/tokeninfo?id_token=<token>`
//!
//! 응답 값은 모두 문자열입니다. (`"email_verified": "true"`, `"exp": "1700000000"`)

use serde::Deserialize;

/// Google이 발급한 ID 토큰의 유효한 발급자 목록
pub const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Google `tokeninfo` 응답 구조체
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleTokenInfo {
    /// 발급자
    pub iss: String,
    /// 토큰이 발급된 OAuth 클라이언트 ID
    pub aud: String,
    /// Google 계정 고유 ID
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// 검증된 Google 사용자 신원
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleIdentity {
    pub google_id: String,
    pub email: String,
    pub name: String,
}
