use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

// regex 的 \d 会匹配全角等 Unicode 数字, 这里只接受 ASCII
static STUDENT_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{8}$").unwrap());

/// 验证学号格式: 必须恰好 8 位数字
pub fn validate_student_id(student_id: &str) -> AppResult<()> {
    if !STUDENT_ID_REGEX.is_match(student_id) {
        return Err(AppError::ValidationError(
            "Invalid student ID format. Must be 8 digits.".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_student_id() {
        assert!(validate_student_id("10000001").is_ok());
        assert!(validate_student_id("00000000").is_ok());
        assert!(validate_student_id("1000000").is_err());
        assert!(validate_student_id("100000012").is_err());
        assert!(validate_student_id("1000000a").is_err());
        assert!(validate_student_id(" 10000001").is_err());
        assert!(validate_student_id("").is_err());
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        assert!(validate_student_id("１２３４５６７８").is_err());
    }
}
