//! # 카테고리 관리 서비스 구현
//!
//! 카테고리의 목록/조회/생성/삭제 비즈니스 로직을 구현합니다.
//! 삭제 시 해당 카테고리를 참조하는 상품은 정리하지 않습니다.

use std::sync::Arc;

use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::categories::request::CreateCategoryRequest;
use crate::domain::dto::categories::response::CategoryResponse;
use crate::domain::entities::category::Category;
use crate::errors::AppError;
use crate::repositories::categories::category_repo::CategoryRepository;

/// 카테고리 관리 비즈니스 로직 서비스
pub struct CategoryService {
    /// 카테고리 데이터 액세스 리포지토리
    category_repo: Arc<CategoryRepository>,
}

inventory::submit! {
    ServiceRegistration {
        name: "category_service",
        constructor: || Box::new(CategoryService::create()),
    }
}

impl CategoryService {
    /// 레지스트리 생성자 — 의존성을 해결하여 새 인스턴스를 만듭니다.
    fn create() -> Arc<Self> {
        Arc::new(Self {
            category_repo: CategoryRepository::instance(),
        })
    }

    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 전체 카테고리 목록 조회
    pub async fn list_categories(&self) -> Result<Vec<CategoryResponse>, AppError> {
        let categories = self.category_repo.find_all().await?;

        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    /// ID로 카테고리 조회
    ///
    /// * `Err(AppError::InvalidId)` - 잘못된 ID 형식
    /// * `Err(AppError::NotFound)` - 해당 카테고리 없음
    pub async fn get_category_by_id(&self, id: &str) -> Result<CategoryResponse, AppError> {
        let category = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        Ok(CategoryResponse::from(category))
    }

    /// 새 카테고리 생성
    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> Result<CategoryResponse, AppError> {
        let category = Category::new(request.name, request.description);
        let created = self.category_repo.insert(category).await?;

        Ok(CategoryResponse::from(created))
    }

    /// 카테고리 삭제 (물리적 삭제, 연쇄 정리 없음)
    ///
    /// * `Err(AppError::NotFound)` - 해당 카테고리 없음
    pub async fn delete_category(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.category_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        Ok(())
    }
}

impl Service for CategoryService {
    fn name(&self) -> &str {
        "category_service"
    }
}
