//! 인증 서비스 모듈
//!
//! JWT 토큰 발급/검증과 Google ID 토큰 검증을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리
//! - Google ID 토큰의 audience/issuer 확인
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{TokenService, IdTokenVerifier};
//!
//! let identity = state.google.verify(&request.token).await?;
//! let token = state.tokens.generate_token(&user)?;
//! ```

pub mod token_service;
pub mod google_auth_service;

pub use token_service::*;
pub use google_auth_service::*;
