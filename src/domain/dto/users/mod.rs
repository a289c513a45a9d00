//! # Users DTO Module
//!
//! 인증 API의 요청/응답 DTO입니다.
//!
//! - [`request`] - 회원가입, 로그인, Google 로그인 요청
//! - [`response`] - 인증 결과(사용자 + JWT)와 프로필 응답
//!
//! 응답 DTO에는 비밀번호 해시가 포함되지 않습니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
