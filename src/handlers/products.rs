//! # Product Catalog HTTP Handlers
//!
//! 상품 목록/단건/카테고리 조회 엔드포인트입니다. 모두 인증 없이 접근할 수 있습니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/api/products` | 필터, 검색, 페이지네이션 목록 |
//! | `GET` | `/api/products/categories` | 활성 상품 카테고리 목록 |
//! | `GET` | `/api/products/{id}` | 활성 상품 단건 |
//!
//! `/categories`는 `/{id}`보다 먼저 등록되어야 합니다.

use actix_web::{get, web, HttpResponse};
use crate::{
    core::AppState,
    domain::dto::{
        products::{CategoriesResponse, ProductDetailResponse, ProductQueryParams, ProductResponse},
        ApiResponse,
    },
    errors::AppError,
};

/// 상품 목록 조회 핸들러
///
/// # Endpoint
/// `GET /api/products?page=1&limit=10&category=Men&size=M&minPrice=20&maxPrice=60&search=shirt`
///
/// 쿼리 검증에 실패하면 저장소에 접근하지 않고 400을 반환합니다.
#[get("")]
pub async fn get_products(
    state: web::Data<AppState>,
    query: web::Query<ProductQueryParams>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;
    let response = state.products.list_products(&filter).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 카테고리 목록 조회 핸들러
///
/// # Endpoint
/// `GET /api/products/categories`
#[get("/categories")]
pub async fn get_categories(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let categories = state.products.categories().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(CategoriesResponse { categories })))
}

/// 상품 단건 조회 핸들러
///
/// # Endpoint
/// `GET /api/products/{id}`
#[get("/{id}")]
pub async fn get_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product = state.products.get_product(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(ProductDetailResponse {
        product: ProductResponse::from(product),
    })))
}
