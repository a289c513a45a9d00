//! # Products DTO Module
//!
//! - [`request`] - 목록 조회 쿼리 파라미터와 검증된 필터
//! - [`response`] - 상품/페이지네이션 응답

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
