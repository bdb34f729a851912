//! User Entity Implementation
//!
//! 서비스 사용자를 표현하는 도메인 엔티티입니다.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 일반 사용자
    User,
    /// 관리자
    Admin,
}

/// 사용자 엔티티
///
/// `users` 컬렉션에 저장되는 문서 구조입니다.
/// 이메일은 유니크 인덱스로 시스템 전체에서 고유합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub fullname: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 비밀번호
    // TODO: 해시 없이 평문으로 저장되고 있음 — 저장 전 bcrypt 해싱 도입 필요
    pub password: String,
    /// 사용자 역할 (미지정 시 없음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자 엔티티 생성 (ID는 저장 시 자동 할당)
    pub fn new(fullname: String, email: String, password: String, role: Option<Role>) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            fullname,
            email,
            password,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
