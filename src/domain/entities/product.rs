//! Product Entity Implementation
//!
//! 카탈로그 상품을 표현하는 핵심 도메인 엔티티입니다.
//! `category` 필드는 Category 컬렉션의 ObjectId 참조입니다.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 상품 엔티티
///
/// `products` 컬렉션에 저장되는 문서 구조입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 상품명
    pub title: String,
    /// 상품 설명
    pub description: String,
    /// 가격 (양수)
    pub price: f64,
    /// 재고 수량 (0 이상)
    pub stock: i64,
    /// 카테고리 참조 — 대상 문서의 존재 여부는 검증하지 않으므로
    /// 카테고리 삭제 후 참조가 남아 있을 수 있음
    pub category: ObjectId,
    /// 상품 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// 새 상품 엔티티 생성 (ID는 저장 시 자동 할당)
    pub fn new(
        title: String,
        description: String,
        price: f64,
        stock: i64,
        category: ObjectId,
        image_url: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            title,
            description,
            price,
            stock,
            category,
            image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
