//! 카테고리 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::category::Category;

/// 카테고리 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        let Category {
            id,
            name,
            description,
            created_at,
            updated_at,
        } = category;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            description,
            created_at,
            updated_at,
        }
    }
}
