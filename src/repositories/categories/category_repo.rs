//! # 카테고리 리포지토리 구현
//!
//! 카테고리 엔티티의 데이터 액세스 계층입니다. `categories` 컬렉션에 대한
//! CRUD 연산과, 상품 populate를 위한 일괄 조회를 담당합니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};

use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::category::Category;
use crate::errors::AppError;
use crate::utils::ids::parse_object_id;

/// 카테고리 데이터 액세스 리포지토리
pub struct CategoryRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

inventory::submit! {
    RepositoryRegistration {
        name: "category_repository",
        constructor: || Box::new(CategoryRepository::create()),
    }
}

impl CategoryRepository {
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

    fn collection(&self) -> mongodb::Collection<Category> {
        self.db.get_database().collection(self.collection_name())
    }

    /// 전체 카테고리 조회
    pub async fn find_all(&self) -> Result<Vec<Category>, AppError> {
        self.collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 카테고리 조회
    ///
    /// * `Err(AppError::InvalidId)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Category>, AppError> {
        let object_id = parse_object_id(id, "Invalid category ID")?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ObjectId 목록으로 카테고리 일괄 조회 (`$in`)
    ///
    /// 상품 목록의 카테고리 populate에 사용됩니다. 존재하지 않는 ID는
    /// 결과에서 빠지며, 호출 측에서 참조 누락으로 처리합니다.
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Category>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.collection()
            .find(doc! { "_id": { "$in": ids } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 카테고리 저장
    pub async fn insert(&self, mut category: Category) -> Result<Category, AppError> {
        let result = self
            .collection()
            .insert_one(&category)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        category.id = Some(result.inserted_id.as_object_id().unwrap());

        Ok(category)
    }

    /// 카테고리 삭제 (물리적 삭제)
    ///
    /// 이 카테고리를 참조하는 상품은 정리하지 않습니다.
    /// 남은 참조는 상품 populate 시 `null`로 노출됩니다.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id, "Invalid category ID")?;

        let result = self
            .collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl Repository for CategoryRepository {
    fn name(&self) -> &str {
        "category_repository"
    }

    fn collection_name(&self) -> &str {
        "categories"
    }
}
