//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 쿼리 파라미터 역직렬화 유틸리티

pub mod string_utils;
