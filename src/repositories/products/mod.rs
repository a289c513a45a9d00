//! 상품 데이터 액세스 계층
//!
//! [`ProductStore`](product_repo::ProductStore) 트레이트와 MongoDB 구현을 제공합니다.

pub mod product_repo;
#[cfg(test)]
pub mod memory;

pub use product_repo::*;
