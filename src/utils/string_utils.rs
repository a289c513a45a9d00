//! # 문자열 유틸리티
//!
//! 요청 파라미터와 입력값 정리에 사용하는 공통 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Men  ".to_string())), Some("Men".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 값을 None으로 변환합니다.
/// 쿼리 문자열에서 `?minPrice=&page=` 처럼 값이 비어 있는 파라미터를
/// 누락된 것과 동일하게 취급하기 위해 사용됩니다.
/// 필드 자체가 없는 경우를 위해 `#[serde(default)]`와 함께 사용해야 합니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Query {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     search: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 이메일 주소를 저장/조회용 형태로 정규화합니다. (trim + 소문자)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
