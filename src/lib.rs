//! 스토어프론트 백엔드
//!
//! 의류 쇼핑몰을 위한 상품 카탈로그 조회와 계정 인증 서비스입니다.
//! 필터/검색/페이지네이션 상품 목록, 이메일/비밀번호 및 Google 로그인,
//! JWT 토큰 기반 인증을 제공합니다.
//!
//! # Features
//!
//! - **상품 카탈로그**: 카테고리, 사이즈, 가격 범위, 전문 검색 필터와 페이지네이션
//! - **계정 인증**: 회원가입, 로그인, Google ID 토큰 로그인
//! - **JWT 인증**: HS256 토큰 기반 상태 없는 인증
//! - **명시적 의존성 주입**: 시작 시점에 조립되는 `AppState`
//! - **MongoDB**: 상품과 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (ProductStore, UserStore)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use storefront_backend::config::AppConfig;
//! use storefront_backend::core::AppState;
//! use storefront_backend::db::Database;
//!
//! let config = AppConfig::from_env()?;
//! let database = Arc::new(Database::connect(&config.database).await?);
//! let state = web::Data::new(AppState::from_database(&config, database));
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
