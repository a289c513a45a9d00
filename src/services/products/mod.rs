//! 상품 조회 서비스 모듈
//!
//! - [`query_builder`] - 검증된 필터를 저장소 조건으로 변환
//! - [`pagination`] - 페이지네이션 메타데이터 계산
//! - [`product_service`] - 목록/단건/카테고리 조회

pub mod pagination;
pub mod product_service;
pub mod query_builder;

pub use product_service::*;
