//! Category Entity Implementation

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 카테고리 엔티티
///
/// `categories` 컬렉션에 저장되는 문서 구조입니다.
/// Product가 ObjectId로 참조하며, 삭제 시 연쇄 정리는 수행하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 카테고리 이름
    pub name: String,
    /// 카테고리 설명
    pub description: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// 새 카테고리 엔티티 생성 (ID는 저장 시 자동 할당)
    pub fn new(name: String, description: String) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            name,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
