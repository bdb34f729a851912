//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다. `users` 컬렉션에 대한
//! CRUD 연산과 이메일 기반 조회를 담당합니다.
//!
//! ## 데이터 무결성
//!
//! 이메일은 유니크 인덱스([`Repository::init`]에서 생성)로 보호됩니다.
//! 서비스 계층의 중복 사전 검사를 동시 요청이 통과하더라도
//! 저장소 수준에서 두 번째 삽입이 거부됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::user::User;
use crate::errors::AppError;
use crate::utils::ids::parse_object_id;

/// 사용자 데이터 액세스 리포지토리
///
/// `users` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

inventory::submit! {
    RepositoryRegistration {
        name: "user_repository",
        constructor: || Box::new(UserRepository::create()),
    }
}

impl UserRepository {
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

    fn collection(&self) -> mongodb::Collection<User> {
        self.db.get_database().collection(self.collection_name())
    }

    /// 전체 사용자 조회 — 페이지네이션 없음
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// * `Err(AppError::InvalidId)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id, "Invalid user ID")?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// 이메일은 유니크하므로 최대 1개의 결과만 반환됩니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 저장
    ///
    /// 저장 후 할당된 ObjectId를 채워 반환합니다.
    /// 이메일 중복 사전 검사는 서비스 계층에서 수행됩니다.
    pub async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = Some(result.inserted_id.as_object_id().unwrap());

        Ok(user)
    }

    /// 사용자 삭제 (물리적 삭제)
    ///
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id, "Invalid user ID")?;

        let result = self
            .collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl Repository for UserRepository {
    fn name(&self) -> &str {
        "user_repository"
    }

    fn collection_name(&self) -> &str {
        "users"
    }

    /// 이메일 유니크 인덱스를 생성합니다.
    ///
    /// 기동 시점에 한 번 실행되며, 중복 이메일 삽입을 저장소 수준에서
    /// 차단하고 이메일 조회를 최적화합니다.
    async fn init(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
