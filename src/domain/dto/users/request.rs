//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! - `fullname`: 비어 있지 않은 문자열
//! - `email`: RFC 5322 이메일 형식 (중복 여부는 서비스 계층에서 별도 검증)
//! - `password`: 최소 6자
//! - `role`: `user` 또는 `admin` (선택, 역직렬화 단계에서 강제됨)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::user::Role;

/// 사용자 생성 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "fullname": "John Doe",
///   "email": "john@example.com",
///   "password": "secret",
///   "role": "user"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// 사용자 이름
    #[validate(length(min = 1, message = "fullname is required"))]
    pub fullname: String,

    /// 사용자 이메일 주소 — 시스템 내 유일 (서비스 계층에서 검증)
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    /// 계정 비밀번호 — 최소 6자
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,

    /// 사용자 역할 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            fullname: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "secret".to_string(),
            role: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_short_password_is_rejected() {
        let mut request = valid_request();
        request.password = "12345".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_six_character_password_is_accepted() {
        let mut request = valid_request();
        request.password = "123456".to_string();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_fullname_is_rejected() {
        let mut request = valid_request();
        request.fullname = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_role_deserializes_from_lowercase() {
        let request: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "fullname": "A",
            "email": "a@a.com",
            "password": "secret",
            "role": "admin"
        }))
        .unwrap();

        assert_eq!(request.role, Some(Role::Admin));
    }

    #[test]
    fn test_unknown_role_is_rejected_at_deserialization() {
        let result = serde_json::from_value::<CreateUserRequest>(serde_json::json!({
            "fullname": "A",
            "email": "a@a.com",
            "password": "secret",
            "role": "superuser"
        }));

        assert!(result.is_err());
    }
}
