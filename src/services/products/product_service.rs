//! # 상품 조회 서비스
//!
//! 검증된 [`ProductFilter`]를 저장소 조건으로 변환하고 페이지 단위로 조회합니다.
//!
//! ## 목록 조회 흐름
//!
//! ```text
//! ProductFilter ─► build_product_query ─► ProductPredicate
//!                                              │
//!                         ┌────────────────────┴────────────────────┐
//!                         ▼                                         ▼
//!              store.find(skip, limit)                       store.count()
//!                         └──────────────── try_join ───────────────┘
//!                                              │
//!                                              ▼
//!                        ProductListResponse { products, pagination }
//! ```

use std::sync::Arc;
use futures_util::future::try_join;
use crate::{
    domain::dto::products::{ProductFilter, ProductListResponse, ProductResponse},
    domain::entities::products::Product,
    errors::AppError,
    repositories::products::{PageWindow, ProductStore},
};
use super::{pagination::{calculate_pagination, skip_for}, query_builder::build_product_query};

/// 상품 조회 비즈니스 로직 서비스
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// 필터 조건에 맞는 활성 상품 한 페이지와 페이지네이션 정보를 조회합니다.
    ///
    /// 페이지 조회와 전체 개수 조회는 동시에 실행되며, 둘 중 하나라도 실패하면 전체가 실패합니다.
    /// 마지막 페이지를 넘는 요청은 빈 목록을 반환합니다.
    pub async fn list_products(&self, filter: &ProductFilter) -> Result<ProductListResponse, AppError> {
        let predicate = build_product_query(filter);
        let window = PageWindow {
            skip: skip_for(filter.page, filter.limit),
            limit: filter.limit,
        };

        let (products, total) = try_join(
            self.store.find(&predicate, window),
            self.store.count(&predicate),
        )
        .await?;

        log::debug!(
            "상품 목록 조회: page={}, limit={}, total={}",
            filter.page, filter.limit, total
        );

        Ok(ProductListResponse {
            products: products.into_iter().map(ProductResponse::from).collect(),
            pagination: calculate_pagination(total, filter.page, filter.limit),
        })
    }

    /// 활성 상품 단건 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 존재하지 않거나 비활성 상태이거나 ID 형식이 잘못된 경우
    pub async fn get_product(&self, id: &str) -> Result<Product, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .filter(|product| product.is_active)
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// 활성 상품의 카테고리 목록 (이름순)
    pub async fn categories(&self) -> Result<Vec<String>, AppError> {
        let mut categories = self.store.distinct_categories().await?;
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::products::PaginationMeta;
    use crate::domain::entities::products::{Category, Size};
    use crate::repositories::products::memory::{sample_product, InMemoryProductStore};

    fn service_with(products: Vec<Product>) -> ProductService {
        ProductService::new(Arc::new(InMemoryProductStore::with_products(products)))
    }

    fn catalog() -> Vec<Product> {
        let mut hidden = sample_product("Archived Jacket", Category::Men, 80.0, &[Size::L], 1);
        hidden.is_active = false;

        vec![
            sample_product("Women Dress", Category::Women, 49.99, &[Size::S, Size::M], 30),
            sample_product("Men T-Shirt", Category::Men, 19.99, &[Size::M, Size::L], 20),
            sample_product("Kids Hoodie", Category::Kids, 35.0, &[Size::S], 10),
            hidden,
        ]
    }

    fn names(response: &ProductListResponse) -> Vec<&str> {
        response.products.iter().map(|p| p.name.as_str()).collect()
    }

    #[actix_web::test]
    async fn test_no_filter_returns_active_products_newest_first() {
        let service = service_with(catalog());

        let response = service.list_products(&ProductFilter::default()).await.unwrap();

        assert_eq!(names(&response), vec!["Kids Hoodie", "Men T-Shirt", "Women Dress"]);
        assert_eq!(response.pagination.total, 3);
    }

    #[actix_web::test]
    async fn test_filters_are_combined() {
        let service = service_with(catalog());
        let filter = ProductFilter {
            size: Some(Size::S),
            min_price: Some(20.0),
            max_price: Some(60.0),
            ..ProductFilter::default()
        };

        let response = service.list_products(&filter).await.unwrap();

        assert_eq!(names(&response), vec!["Kids Hoodie", "Women Dress"]);
    }

    #[actix_web::test]
    async fn test_second_page() {
        let service = service_with(catalog());
        let filter = ProductFilter { page: 2, limit: 2, ..ProductFilter::default() };

        let response = service.list_products(&filter).await.unwrap();

        assert_eq!(names(&response), vec!["Women Dress"]);
        assert_eq!(
            response.pagination,
            PaginationMeta { page: 2, limit: 2, total: 3, total_pages: 2, has_next: false, has_prev: true }
        );
    }

    #[actix_web::test]
    async fn test_get_product_hides_inactive_and_unknown() {
        let products = catalog();
        let active_id = products[0].id_string().unwrap();
        let hidden_id = products[3].id_string().unwrap();
        let service = service_with(products);

        assert_eq!(service.get_product(&active_id).await.unwrap().name, "Women Dress");
        assert!(matches!(service.get_product(&hidden_id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.get_product("not-an-id").await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_categories_of_active_products() {
        let mut products = catalog();
        products.retain(|p| p.category != Category::Kids);
        let service = service_with(products);

        assert_eq!(service.categories().await.unwrap(), vec!["Men", "Women"]);
    }
}
