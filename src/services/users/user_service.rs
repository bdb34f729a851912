//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생성, 조회, 삭제 비즈니스 로직을 구현합니다.
//!
//! ## 데이터 보안
//!
//! 모든 조회/생성 응답은 [`UserResponse`]로 변환되어 비밀번호 필드가
//! 노출되지 않습니다. 이메일 중복은 저장 전에 사전 검사합니다.

use std::sync::Arc;

use crate::core::registry::{Service, ServiceLocator, ServiceRegistration};
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::user::User;
use crate::errors::AppError;
use crate::repositories::users::user_repo::UserRepository;

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,
}

inventory::submit! {
    ServiceRegistration {
        name: "user_service",
        constructor: || Box::new(UserService::create()),
    }
}

impl UserService {
    /// 레지스트리 생성자 — 의존성을 해결하여 새 인스턴스를 만듭니다.
    fn create() -> Arc<Self> {
        Arc::new(Self {
            user_repo: UserRepository::instance(),
        })
    }

    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 전체 사용자 목록 조회 (비밀번호 제외)
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자 조회 (비밀번호 제외)
    ///
    /// * `Err(AppError::InvalidId)` - 잘못된 ID 형식
    /// * `Err(AppError::NotFound)` - 해당 사용자 없음
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 새 사용자 계정 생성
    ///
    /// 이메일 중복을 사전 검사한 뒤 저장합니다. 동시 요청이 검사를 함께
    /// 통과하는 경우는 저장소의 유니크 인덱스가 두 번째 삽입을 거부합니다.
    ///
    /// * `Err(AppError::DuplicateEmail)` - 이미 등록된 이메일 (400)
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::DuplicateEmail("Email already exists".to_string()));
        }

        let user = User::new(
            request.fullname,
            request.email,
            request.password,
            request.role,
        );

        let created = self.user_repo.insert(user).await?;

        Ok(UserResponse::from(created))
    }

    /// 사용자 계정 삭제 (물리적 삭제)
    ///
    /// * `Err(AppError::NotFound)` - 해당 사용자 없음
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.user_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}

impl Service for UserService {
    fn name(&self) -> &str {
        "user_service"
    }
}
