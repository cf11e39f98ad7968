//! API Errors

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};

/// Failure of a single server call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("network error: {0}")]
    Transport(String),
    #[error("server returned {status}{}", message_suffix(.message))]
    Server { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message to show the user: the server's own text, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message: Some(message), .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Alert text: server rejections use the server text or `rejected`,
    /// anything that never got an answer uses `unreachable`
    pub fn describe(&self, rejected: &str, unreachable: &str) -> String {
        match self {
            ApiError::Server { .. } => self.user_message(rejected),
            _ => unreachable.to_string(),
        }
    }

    pub fn from_js(value: JsValue) -> Self {
        ApiError::Transport(js_error_text(&value))
    }
}

/// Error body shapes used by the server: `{message}` or `{error}`
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default()
}

pub fn js_error_text(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Server { status: 409, message: Some("이미 신청된 물건입니다.".into()) };
        assert_eq!(err.user_message("신청 실패"), "이미 신청된 물건입니다.");
    }

    #[test]
    fn test_user_message_fallback() {
        let err = ApiError::Server { status: 500, message: None };
        assert_eq!(err.user_message("신청 실패"), "신청 실패");
        let err = ApiError::Transport("Failed to fetch".into());
        assert_eq!(err.user_message("신청 실패"), "신청 실패");
    }

    #[test]
    fn test_describe_splits_rejection_from_unreachable() {
        let rejected = ApiError::Server { status: 400, message: None };
        assert_eq!(rejected.describe("인증번호가 틀렸습니다.", "서버 에러"), "인증번호가 틀렸습니다.");
        let rejected = ApiError::Server { status: 400, message: Some("만료된 코드".into()) };
        assert_eq!(rejected.describe("인증번호가 틀렸습니다.", "서버 에러"), "만료된 코드");
        let offline = ApiError::Transport("Failed to fetch".into());
        assert_eq!(offline.describe("인증번호가 틀렸습니다.", "서버 에러"), "서버 에러");
        assert_eq!(ApiError::Decode("x".into()).describe("a", "b"), "b");
    }

    #[test]
    fn test_error_body_shapes() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"코드 불일치"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("코드 불일치"));
        let body: ErrorBody = serde_json::from_str(r#"{"error":"파일이 너무 큽니다"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("파일이 너무 큽니다"));
        let body: ErrorBody = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(body.into_message(), None);
    }

    #[test]
    fn test_display() {
        let err = ApiError::Server { status: 400, message: Some("bad".into()) };
        assert_eq!(err.to_string(), "server returned 400: bad");
        let err = ApiError::Server { status: 404, message: None };
        assert_eq!(err.to_string(), "server returned 404");
    }
}
