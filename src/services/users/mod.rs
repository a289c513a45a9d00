//! 사용자 관리 서비스 모듈
//!
//! 회원가입, 로그인, Google 계정 연결 등 계정 관련 비즈니스 로직을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지 (소문자 정규화)
//! - 입력값 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! let user = state.users.register(request).await?;
//! ```

pub mod user_service;

pub use user_service::*;
