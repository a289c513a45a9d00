//! 테스트용 메모리 상품 저장소

use std::collections::BTreeSet;
use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::domain::entities::products::{Category, Product, Size};
use crate::errors::AppError;
use crate::services::products::query_builder::ProductPredicate;
use super::{PageWindow, ProductStore};

#[derive(Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products: RwLock::new(products) }
    }

    fn snapshot(&self) -> Vec<Product> {
        self.products.read().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find(&self, predicate: &ProductPredicate, window: PageWindow) -> Result<Vec<Product>, AppError> {
        // MongoDB 드라이버와 동일하게 i64 범위를 넘는 skip은 실패합니다.
        let skip = i64::try_from(window.skip)
            .map_err(|_| AppError::DatabaseError(format!("skip out of range: {}", window.skip)))?;

        let mut matched: Vec<Product> = self
            .snapshot()
            .into_iter()
            .filter(|product| predicate.matches(product))
            .collect();

        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matched
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(window.limit as usize)
            .collect())
    }

    async fn count(&self, predicate: &ProductPredicate) -> Result<u64, AppError> {
        Ok(self.snapshot().iter().filter(|product| predicate.matches(product)).count() as u64)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        Ok(self.snapshot().into_iter().find(|product| product.id == Some(object_id)))
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, AppError> {
        let categories: BTreeSet<String> = self
            .snapshot()
            .iter()
            .filter(|product| product.is_active)
            .map(|product| product.category.to_string())
            .collect();
        Ok(categories.into_iter().collect())
    }
}

/// 테스트용 상품 생성 헬퍼
///
/// `age_minutes`가 작을수록 최신 상품입니다.
pub fn sample_product(name: &str, category: Category, price: f64, sizes: &[Size], age_minutes: i64) -> Product {
    let created_at = DateTime::from_millis(1_700_000_000_000 - age_minutes * 60_000);
    Product {
        id: Some(ObjectId::new()),
        name: name.to_string(),
        description: format!("{} from the seasonal collection", name),
        price,
        image_url: "https://cdn.example.com/product.png".to_string(),
        category,
        sizes: sizes.to_vec(),
        stock: 10,
        is_active: true,
        created_at,
        updated_at: created_at,
    }
}
