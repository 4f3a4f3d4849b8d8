//! 인사말 관련 DTO

use serde::{Deserialize, Serialize};

/// 인사말 응답 DTO: `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// `GET /hello` 쿼리 파라미터
///
/// 같은 키가 반복될 수 있으므로 순서를 보존하는 `(key, value)` 목록으로 받습니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct GreetingQuery(Vec<(String, String)>);

impl GreetingQuery {
    /// 첫 번째 `name` 값. 빈 값은 없는 것으로 취급합니다.
    pub fn name(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == "name")
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }
}
