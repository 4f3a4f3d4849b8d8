//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// 경로 꼬리에서 첫 번째 세그먼트를 추출합니다
///
/// `/hello/` 이후의 문자열을 `/` 기준으로 분할했을 때의 첫 조각을 반환합니다.
/// 세그먼트가 비어 있으면 빈 문자열을 반환합니다.
///
/// # 인자
/// * `tail` - 라우트 접두사 이후의 경로 문자열
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::first_path_segment;
///
/// assert_eq!(first_path_segment("alice"), "alice");
/// assert_eq!(first_path_segment("alice/extra"), "alice");
/// assert_eq!(first_path_segment(""), "");
/// assert_eq!(first_path_segment("/x"), "");
/// ```
pub fn first_path_segment(tail: &str) -> &str {
    tail.split('/').next().unwrap_or_default()
}

/// 문자열이 비어 있지 않은지 확인
///
/// 공백은 잘라내지 않습니다. `" "`는 유효한 값으로 취급됩니다.
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// null을 빈 문자열로 취급하는 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_null_as_empty")]`와 함께 사용하면
/// 필드 누락과 `null` 모두 빈 문자열이 되어, JSON 파싱이 아닌
/// 필수값 검증 단계에서 거부됩니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Payload {
///     #[serde(default, deserialize_with = "deserialize_null_as_empty")]
///     name: String,
/// }
///
/// // JSON: {"name": "Bob"} → "Bob"
/// // JSON: {"name": null}  → ""
/// // JSON: {}              → ""
/// // JSON: {"name": 5}     → Err
/// ```
pub fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
