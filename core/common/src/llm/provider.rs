//! LLMプロバイダのトレイト定義とメッセージ型

use crate::error::Error;
use serde::Serialize;
use serde_json::Value;

/// メッセージのロール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

/// ロール付きメッセージ（1 回の評価ごとに組み立てて使い捨てる）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}

/// LLMプロバイダのトレイト
///
/// リクエスト生成・HTTP 呼び出し・本文抽出を分けておき、
/// テストでは `make_http_request` だけを差し替えられるようにする。
pub trait LlmProvider {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストに載せるモデル名
    fn model(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `messages` - 送信するメッセージ列（順序はそのまま保たれる）
    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error>;

    /// HTTPリクエストを 1 回だけ実行してレスポンス本文を返す（リトライしない）
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンス本文から最初の choice のテキストを取り出す
    fn parse_response_text(&self, response_json: &str) -> Result<String, Error>;

    /// payload 生成 → HTTP → 本文抽出をまとめて行う
    fn complete(&self, messages: &[Message]) -> Result<String, Error> {
        let payload = self.make_request_payload(messages)?;
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;
        let response_json = self.make_http_request(&request_json)?;
        self.parse_response_text(&response_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    #[test]
    fn test_message_system() {
        let msg = Message::system("rules");
        assert_eq!(msg.role, Role::System);
        assert_eq!(msg.content, "rules");
    }

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_message_serializes_lowercase_role() {
        let v = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(v, json!({ "role": "user", "content": "hi" }));
        let v = serde_json::to_value(Message::system("s")).unwrap();
        assert_eq!(v["role"], "system");
    }

    /// 送られたリクエストを記録し、固定のレスポンスを返す
    struct Recording {
        sent: RefCell<Vec<String>>,
        response: String,
    }

    impl LlmProvider for Recording {
        fn name(&self) -> &str {
            "recording"
        }

        fn model(&self) -> &str {
            "m"
        }

        fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
            Ok(json!({ "model": self.model(), "messages": messages }))
        }

        fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
            self.sent.borrow_mut().push(request_json.to_string());
            Ok(self.response.clone())
        }

        fn parse_response_text(&self, response_json: &str) -> Result<String, Error> {
            Ok(response_json.to_uppercase())
        }
    }

    #[test]
    fn test_complete_runs_single_request() {
        let p = Recording {
            sent: RefCell::new(Vec::new()),
            response: "ok".to_string(),
        };
        let text = p.complete(&[Message::user("q")]).unwrap();
        assert_eq!(text, "OK");
        let sent = p.sent.borrow();
        assert_eq!(sent.len(), 1);
        let body: Value = serde_json::from_str(&sent[0]).unwrap();
        assert_eq!(body["messages"][0]["content"], "q");
    }
}
