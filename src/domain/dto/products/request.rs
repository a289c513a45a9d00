//! 상품 목록 조회 쿼리 파라미터
//!
//! 쿼리 문자열은 모두 문자열로 받은 뒤 [`ProductQueryParams::into_filter`]에서 한 번에 검증합니다.
//! 첫 번째 실패에서 멈추지 않고 실패한 모든 필드의 메시지를 모아
//! `AppError::ValidationError`로 반환합니다.

use serde::Deserialize;
use crate::domain::entities::products::{Category, Size};
use crate::errors::AppError;
use crate::utils::string_utils::deserialize_optional_string;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// `GET /api/products` 원본 쿼리 파라미터
///
/// 비어 있는 값(`?minPrice=`)은 누락된 것으로 취급합니다.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQueryParams {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub page: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub limit: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub min_price: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub max_price: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub search: Option<String>,
}

/// 검증을 통과한 상품 필터
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    /// 1 이상
    pub page: u64,
    /// 1 이상 [`MAX_LIMIT`] 이하
    pub limit: u64,
    pub category: Option<Category>,
    pub size: Option<Size>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            category: None,
            size: None,
            min_price: None,
            max_price: None,
            search: None,
        }
    }
}

impl ProductQueryParams {
    /// 쿼리 파라미터를 검증하여 [`ProductFilter`]로 변환합니다.
    ///
    /// # Errors
    ///
    /// 하나 이상의 필드가 잘못된 경우 모든 실패 메시지를 담은 `AppError::ValidationError`
    pub fn into_filter(self) -> Result<ProductFilter, AppError> {
        let mut errors = Vec::new();

        let page = match self.page.as_deref() {
            None => Some(DEFAULT_PAGE),
            Some(raw) => match raw.parse::<u64>() {
                Ok(page) if page >= 1 => Some(page),
                _ => {
                    errors.push("Page must be a positive integer".to_string());
                    None
                }
            },
        };

        let limit = match self.limit.as_deref() {
            None => Some(DEFAULT_LIMIT),
            Some(raw) => match raw.parse::<u64>() {
                Ok(limit) if (1..=MAX_LIMIT).contains(&limit) => Some(limit),
                _ => {
                    errors.push(format!("Limit must be an integer between 1 and {}", MAX_LIMIT));
                    None
                }
            },
        };

        let category = self.category.as_deref().and_then(|raw| match raw.parse::<Category>() {
            Ok(category) => Some(category),
            Err(_) => {
                errors.push("Category must be Men, Women, or Kids".to_string());
                None
            }
        });

        let size = self.size.as_deref().and_then(|raw| match raw.parse::<Size>() {
            Ok(size) => Some(size),
            Err(_) => {
                errors.push("Size must be S, M, L, or XL".to_string());
                None
            }
        });

        let min_price = parse_price(self.min_price.as_deref(), "Minimum price", &mut errors);
        let max_price = parse_price(self.max_price.as_deref(), "Maximum price", &mut errors);

        if let (Some(min), Some(max)) = (min_price, max_price) {
            if min > max {
                errors.push("Minimum price cannot be greater than maximum price".to_string());
            }
        }

        match (page, limit) {
            (Some(page), Some(limit)) if errors.is_empty() => Ok(ProductFilter {
                page,
                limit,
                category,
                size,
                min_price,
                max_price,
                search: self.search,
            }),
            _ => Err(AppError::ValidationError(errors)),
        }
    }
}

fn parse_price(raw: Option<&str>, label: &str, errors: &mut Vec<String>) -> Option<f64> {
    let raw = raw?;
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Some(price),
        Ok(price) if price.is_finite() => {
            errors.push(format!("{} cannot be negative", label));
            None
        }
        _ => {
            errors.push(format!("{} must be a valid number", label));
            None
        }
    }
}
