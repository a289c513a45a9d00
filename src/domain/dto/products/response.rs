use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::products::{Category, Product, Size};

/// 페이지네이션 메타데이터
///
/// 요청마다 계산되며 저장되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// 상품 응답 DTO
///
/// MongoDB 문서 형태를 그대로 유지하여 `_id`를 hex 문자열로 내보냅니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: Category,
    pub sizes: Vec<Size>,
    pub stock: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id_string().unwrap_or_default(),
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            category: product.category,
            sizes: product.sizes,
            stock: product.stock,
            is_active: product.is_active,
            created_at: product.created_at.to_system_time().into(),
            updated_at: product.updated_at.to_system_time().into(),
        }
    }
}

/// `GET /api/products` 응답 데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub pagination: PaginationMeta,
}

/// `GET /api/products/{id}` 응답 데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetailResponse {
    pub product: ProductResponse,
}

/// `GET /api/products/categories` 응답 데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}
