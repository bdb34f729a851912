//! # 상품 리포지토리 구현
//!
//! 상품 엔티티의 데이터 액세스 계층입니다. `products` 컬렉션에 대한
//! CRUD 연산과 필터 기반 검색을 담당합니다.
//!
//! 모든 메서드는 `Result<T, AppError>`를 반환하며, 잘못된 ObjectId 형식은
//! 데이터베이스 접근 전에 `InvalidId`로 차단됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::product::Product;
use crate::errors::AppError;
use crate::utils::ids::parse_object_id;

/// 상품 데이터 액세스 리포지토리
///
/// `products` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
pub struct ProductRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

inventory::submit! {
    RepositoryRegistration {
        name: "product_repository",
        constructor: || Box::new(ProductRepository::create()),
    }
}

impl ProductRepository {
    /// 레지스트리 생성자 — 의존성을 해결하여 새 인스턴스를 만듭니다.
    fn create() -> Arc<Self> {
        Arc::new(Self {
            db: ServiceLocator::get::<Database>(),
        })
    }

    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    fn collection(&self) -> mongodb::Collection<Product> {
        self.db.get_database().collection(self.collection_name())
    }

    /// 전체 상품 조회 — 페이지네이션 없음
    pub async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        self.collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 필터 문서로 상품 검색
    ///
    /// 필터 구성은 서비스 계층([`build_search_filter`] 참조)에서 담당합니다.
    ///
    /// [`build_search_filter`]: crate::services::products::product_service::build_search_filter
    pub async fn find_by_filter(&self, filter: Document) -> Result<Vec<Product>, AppError> {
        self.collection()
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 상품 조회
    ///
    /// * `Ok(Some(Product))` - 상품을 찾은 경우
    /// * `Ok(None)` - 해당 ID의 상품이 없는 경우
    /// * `Err(AppError::InvalidId)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError> {
        let object_id = parse_object_id(id, "Invalid product ID")?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 상품 저장
    ///
    /// 저장 후 할당된 ObjectId를 채워 반환합니다.
    pub async fn insert(&self, mut product: Product) -> Result<Product, AppError> {
        let result = self
            .collection()
            .insert_one(&product)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        product.id = Some(result.inserted_id.as_object_id().unwrap());

        Ok(product)
    }

    /// 상품 부분 업데이트
    ///
    /// `$set` 연산자로 전달된 필드만 변경하고, 업데이트 이후 문서를 반환합니다.
    ///
    /// * `Ok(None)` - 해당 ID의 상품이 존재하지 않음
    pub async fn update(&self, id: &str, update_doc: Document) -> Result<Option<Product>, AppError> {
        let object_id = parse_object_id(id, "Invalid product ID")?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 상품 삭제 (물리적 삭제)
    ///
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 해당 ID의 상품이 존재하지 않음
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id, "Invalid product ID")?;

        let result = self
            .collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl Repository for ProductRepository {
    fn name(&self) -> &str {
        "product_repository"
    }

    fn collection_name(&self) -> &str {
        "products"
    }
}
