//! # Domain Models Module
//!
//! 저장되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! - [`auth`] - 요청에서 추출한 인증 사용자 (`CurrentUser`)
//! - [`oauth`] - Google ID 토큰 검증 결과
//! - [`token`] - JWT 클레임

pub mod auth;
pub mod oauth;
pub mod token;
