//! 사용자 응답 DTO
//!
//! 비밀번호는 응답 구조체에 필드 자체가 없으므로 어떤 직렬화 경로로도
//! 클라이언트에 노출되지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::user::{Role, User};

/// 사용자 응답 DTO (비밀번호 제외)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub fullname: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            fullname,
            email,
            role,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            fullname,
            email,
            role,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_never_contains_password() {
        let user = User::new(
            "John Doe".to_string(),
            "john@example.com".to_string(),
            "secret".to_string(),
            Some(Role::User),
        );

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json.get("email").unwrap(), "john@example.com");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let user = User::new(
            "Admin".to_string(),
            "admin@example.com".to_string(),
            "secret".to_string(),
            Some(Role::Admin),
        );

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json.get("role").unwrap(), "admin");
    }

    #[test]
    fn test_absent_role_is_omitted() {
        let user = User::new(
            "John".to_string(),
            "j@example.com".to_string(),
            "secret".to_string(),
            None,
        );

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(json.get("role").is_none());
    }
}
