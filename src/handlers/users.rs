//! # User HTTP Handlers
//!
//! 사용자 리소스의 CRUD 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 전체 목록 (비밀번호 제외) | 200 OK |
//! | `GET` | `/users/{id}` | 단건 조회 (비밀번호 제외) | 200 OK |
//! | `POST` | `/users` | 사용자 생성 | 201 Created |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 200 OK |
//!
//! 수정/검색 엔드포인트는 제공하지 않습니다.

use actix_web::{delete, get, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::errors::AppError;
use crate::services::users::user_service::UserService;

/// 전체 사용자 목록 조회 핸들러
///
/// 모든 응답에서 비밀번호 필드는 제외됩니다.
#[utoipa::path(
    context_path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "전체 사용자 목록 (비밀번호 제외)", body = [UserResponse]),
        (status = 500, description = "서버 오류"),
    ),
)]
#[get("")]
pub async fn get_all_users() -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 단건 조회 핸들러
#[utoipa::path(
    context_path = "/users",
    tag = "Users",
    params(("user_id" = String, Path, description = "사용자 ObjectId")),
    responses(
        (status = 200, description = "사용자 정보 (비밀번호 제외)", body = UserResponse),
        (status = 400, description = "잘못된 ID 형식"),
        (status = 404, description = "사용자 없음"),
        (status = 500, description = "서버 오류"),
    ),
)]
#[get("/{user_id}")]
pub async fn get_user_by_id(user_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 생성 핸들러
///
/// 이메일 중복 시 400 `Email already exists`로 거부됩니다.
///
/// # 요청 본문
///
/// ```json
/// {
///   "fullname": "John Doe",
///   "email": "john@example.com",
///   "password": "secret"
/// }
/// ```
#[utoipa::path(
    context_path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "생성된 사용자 (비밀번호 제외)", body = UserResponse),
        (status = 400, description = "검증 실패 또는 이메일 중복"),
        (status = 500, description = "서버 오류"),
    ),
)]
#[post("")]
pub async fn create_user(payload: web::Json<CreateUserRequest>) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let user = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

/// 사용자 삭제 핸들러
#[utoipa::path(
    context_path = "/users",
    tag = "Users",
    params(("user_id" = String, Path, description = "사용자 ObjectId")),
    responses(
        (status = 200, description = "삭제 완료 메시지"),
        (status = 400, description = "잘못된 ID 형식"),
        (status = 404, description = "사용자 없음"),
        (status = 500, description = "서버 오류"),
    ),
)]
#[delete("/{user_id}")]
pub async fn delete_user(user_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "User deleted successfully" })))
}
