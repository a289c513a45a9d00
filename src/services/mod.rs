//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시점에 설정과 저장소를 주입받아 생성되고,
//! [`AppState`](crate::core::AppState)에 묶여 핸들러로 전달됩니다.
//!
//! # Features
//!
//! - 상품 목록 필터링, 검색, 페이지네이션
//! - 회원가입, 로그인, Google 로그인
//! - JWT 토큰 기반 인증

pub mod auth;
pub mod products;
pub mod users;
