//! 카테고리 생성 요청 DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 카테고리 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    /// 카테고리 이름
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// 카테고리 설명
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes() {
        let request = CreateCategoryRequest {
            name: "Peripherals".to_string(),
            description: "Desk gear".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let request = CreateCategoryRequest {
            name: String::new(),
            description: "Desk gear".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_description_is_rejected() {
        let request = CreateCategoryRequest {
            name: "Peripherals".to_string(),
            description: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
