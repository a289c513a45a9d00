//! Users Entity Module
//!
//! 이메일/비밀번호 계정과 Google 계정을 모두 표현하는 User 엔티티를 정의합니다.

pub mod user;

pub use user::*;
