//! 인증 요청관련 DTO
//!
//! 회원가입, 로그인, Google 로그인 요청 본문을 매핑합니다.
//! 모든 필드에 `#[serde(default)]`를 적용하여 필드가 누락된 요청도
//! JSON 파싱 에러가 아닌 필드별 검증 메시지로 응답합니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 회원가입 요청 구조체
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    /// 이름 (앞뒤 공백 제외 2-50자, 영문자와 공백만 허용)
    #[validate(custom(function = "validate_name_length"))]
    #[validate(custom(function = "validate_name_characters"))]
    pub name: String,

    #[validate(email(message = "Please provide a valid email address"))]
    #[validate(length(max = 100, message = "Email cannot exceed 100 characters"))]
    pub email: String,

    /// 비밀번호 (6-100자, 소문자/대문자/숫자 각각 1개 이상)
    #[validate(length(min = 6, max = 100, message = "Password must be between 6 and 100 characters"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

/// 로컬 로그인 요청 구조체
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Google 로그인 요청 구조체
///
/// `token`은 클라이언트가 Google Identity Services에서 받은 ID 토큰입니다.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct GoogleAuthRequest {
    #[validate(length(min = 1, message = "Google token is required"))]
    pub token: String,
}

/// 저장 시 앞뒤 공백이 제거되므로 제거한 뒤의 길이를 검사합니다.
fn validate_name_length(name: &str) -> Result<(), ValidationError> {
    let length = name.trim().chars().count();
    if !(2..=50).contains(&length) {
        return Err(ValidationError::new("length")
            .with_message("Name must be between 2 and 50 characters".into()));
    }
    Ok(())
}

fn validate_name_characters(name: &str) -> Result<(), ValidationError> {
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
        return Err(ValidationError::new("invalid_name")
            .with_message("Name can only contain letters and spaces".into()));
    }
    Ok(())
}

fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_lowercase && has_uppercase && has_digit) {
        return Err(ValidationError::new("weak_password").with_message(
            "Password must contain at least one lowercase letter, one uppercase letter, and one number".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::validation_messages;

    fn register(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(register("John Doe", "john@example.com", "Password123").validate().is_ok());
    }

    #[test]
    fn test_name_rules() {
        let errors = register("J", "john@example.com", "Password123").validate().unwrap_err();
        assert_eq!(validation_messages(&errors), vec!["Name must be between 2 and 50 characters"]);

        let errors = register("John123", "john@example.com", "Password123").validate().unwrap_err();
        assert_eq!(validation_messages(&errors), vec!["Name can only contain letters and spaces"]);
    }

    #[test]
    fn test_name_length_ignores_surrounding_whitespace() {
        for name in ["  ", "", "  J  "] {
            let errors = register(name, "john@example.com", "Password123").validate().unwrap_err();
            assert_eq!(
                validation_messages(&errors),
                vec!["Name must be between 2 and 50 characters"],
                "{:?}",
                name
            );
        }

        assert!(register("  Jo  ", "john@example.com", "Password123").validate().is_ok());
    }

    #[test]
    fn test_password_strength() {
        let errors = register("John Doe", "john@example.com", "password").validate().unwrap_err();
        assert_eq!(
            validation_messages(&errors),
            vec!["Password must contain at least one lowercase letter, one uppercase letter, and one number"]
        );

        assert!(register("John Doe", "john@example.com", "Pa1").validate().is_err());
    }

    #[test]
    fn test_every_invalid_field_is_reported() {
        let errors = register("J", "not-an-email", "weak").validate().unwrap_err();
        let messages = validation_messages(&errors);

        assert!(messages.contains(&"Please provide a valid email address".to_string()));
        assert!(messages.contains(&"Name must be between 2 and 50 characters".to_string()));
        assert!(messages.len() >= 4);
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty() {
        let request: LoginRequest = serde_json::from_str("{}").unwrap();
        let errors = request.validate().unwrap_err();
        let messages = validation_messages(&errors);

        assert_eq!(
            messages,
            vec!["Please provide a valid email address", "Password is required"]
        );
    }

    #[test]
    fn test_google_token_required() {
        let errors = GoogleAuthRequest::default().validate().unwrap_err();
        assert_eq!(validation_messages(&errors), vec!["Google token is required"]);
    }
}
