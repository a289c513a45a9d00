//! Product Entity Module
//!
//! 카탈로그 상품 엔티티와 카테고리/사이즈 열거형을 정의합니다.

pub mod product;

pub use product::*;
