//! MongoDB ObjectId 파싱 유틸리티
//!
//! 모든 `{id}` 경로 파라미터는 데이터베이스 조회 전에 형식 검증을 거칩니다.
//! 잘못된 형식은 리소스별 메시지와 함께 400 응답으로 변환됩니다.

use mongodb::bson::oid::ObjectId;

use crate::errors::AppError;

/// 문자열을 ObjectId로 파싱합니다.
///
/// 실패 시 `AppError::InvalidId`를 반환하며, 메시지는 호출 측에서
/// 리소스에 맞게 지정합니다 (예: `"Invalid product ID"`).
///
/// # Examples
///
/// ```rust,ignore
/// let oid = parse_object_id(&id, "Invalid product ID")?;
/// ```
pub fn parse_object_id(id: &str, message: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_object_id_is_accepted() {
        let result = parse_object_id("507f1f77bcf86cd799439011", "Invalid product ID");
        assert!(result.is_ok());
    }

    #[test]
    fn test_malformed_id_is_rejected_with_given_message() {
        let result = parse_object_id("not-an-id", "Invalid product ID");
        match result {
            Err(AppError::InvalidId(msg)) => assert_eq!(msg, "Invalid product ID"),
            other => panic!("expected InvalidId, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_truncated_hex_is_rejected() {
        // 23자리 16진수 — 길이 미달
        let result = parse_object_id("507f1f77bcf86cd79943901", "Invalid user ID");
        assert!(matches!(result, Err(AppError::InvalidId(_))));
    }

    #[test]
    fn test_empty_string_is_rejected() {
        let result = parse_object_id("", "Invalid category ID");
        assert!(matches!(result, Err(AppError::InvalidId(_))));
    }
}
