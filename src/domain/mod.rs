//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities      - MongoDB 문서와 매핑되는 Product, User
//! ├── dto           - 요청/응답 객체 (쿼리 검증, 응답 봉투)
//! └── models        - 저장되지 않는 모델 (JWT 클레임, Google 신원, CurrentUser)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 상품 목록 조회 흐름
//!
//! ```rust,ignore
//! use crate::domain::dto::products::ProductQueryParams;
//!
//! // 1. 원본 쿼리 문자열 → 검증된 필터 (실패한 모든 필드를 한 번에 보고)
//! let filter = params.into_filter()?;
//!
//! // 2. 서비스가 필터로 조건을 만들고 페이지 조회와 개수 조회를 동시에 수행
//! let list = product_service.list_products(&filter).await?;
//!
//! // 3. 응답 봉투로 감싸서 반환
//! HttpResponse::Ok().json(ApiResponse::success(list))
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
