//! # OAuth Domain Models Module
//!
//! Google ID 토큰 검증 결과를 표현하는 모델입니다.
//! 클라이언트가 Google Identity Services에서 받은 ID 토큰을 서버가 검증한 뒤
//! [`GoogleIdentity`]로 변환하여 계정 조회/생성에 사용합니다.

pub mod google_identity;

pub use google_identity::*;
