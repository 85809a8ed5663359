//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! 接続先・キー・モデルは `ClientConfig` で明示的に渡す（環境変数は読まない）。
//! 1 回の同期 POST のみで、リトライ・ストリーミングは行わない。

use crate::error::Error;
use crate::llm::provider::{LlmProvider, Message};
use serde_json::{json, Value};
use std::time::Duration;

/// 既定のタイムアウト
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// 採点のぶれを抑えるための低い温度
pub const TEMPERATURE: f64 = 0.1;

pub const MAX_TOKENS: u32 = 1000;

const USER_AGENT: &str = concat!("surgery-qc/", env!("CARGO_PKG_VERSION"));

/// クライアント設定（起動時に一度だけ組み立てて渡す）
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatProvider {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::blocking::Client,
}

impl OpenAiCompatProvider {
    /// 新しいプロバイダを作成
    ///
    /// base_url 末尾の `/` は取り除く。
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            client,
        })
    }

    pub fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl LlmProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
        let messages = serde_json::to_value(messages)
            .map_err(|e| Error::json(format!("Failed to serialize messages: {}", e)))?;
        Ok(json!({
            "model": self.model,
            "messages": messages,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
            "response_format": { "type": "json_object" }
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let response = self
            .client
            .post(self.url())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::http(status.as_u16(), response_text));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<String, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::ResponseJson(e.to_string()))?;

        let first = v
            .get("choices")
            .and_then(Value::as_array)
            .and_then(|choices| choices.first())
            .ok_or(Error::NoChoices)?;

        first["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or(Error::MissingContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(base_url: &str) -> OpenAiCompatProvider {
        OpenAiCompatProvider::new(ClientConfig::new("sk-test", base_url, "deepseek-chat")).unwrap()
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let p = provider("https://api.deepseek.com/");
        assert_eq!(p.url(), "https://api.deepseek.com/chat/completions");
        let p = provider("http://localhost:8080/v1");
        assert_eq!(p.url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_client_config_defaults_to_30s_timeout() {
        let c = ClientConfig::new("k", "u", "m");
        assert_eq!(c.timeout, Duration::from_secs(30));
        let c = c.with_timeout(Duration::from_secs(2));
        assert_eq!(c.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_request_payload_shape() {
        let p = provider("http://localhost");
        let payload = p
            .make_request_payload(&[Message::system("rubric"), Message::user("steps")])
            .unwrap();
        assert_eq!(payload["model"], "deepseek-chat");
        assert_eq!(payload["temperature"], 0.1);
        assert_eq!(payload["max_tokens"], 1000);
        assert_eq!(payload["response_format"]["type"], "json_object");
        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "rubric");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "steps");
        assert!(payload.get("stream").is_none());
    }

    #[test]
    fn test_parse_response_text_first_choice() {
        let p = provider("http://localhost");
        let body = r#"{"choices":[{"message":{"content":"{\"a\":1}"}},{"message":{"content":"x"}}]}"#;
        assert_eq!(p.parse_response_text(body).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_parse_response_text_malformed_outer() {
        let p = provider("http://localhost");
        let err = p.parse_response_text("not json").unwrap_err();
        assert!(matches!(err, Error::ResponseJson(_)), "got: {:?}", err);
    }

    #[test]
    fn test_parse_response_text_missing_or_empty_choices() {
        let p = provider("http://localhost");
        assert!(matches!(
            p.parse_response_text(r#"{"id":"x"}"#).unwrap_err(),
            Error::NoChoices
        ));
        assert!(matches!(
            p.parse_response_text(r#"{"choices":[]}"#).unwrap_err(),
            Error::NoChoices
        ));
        assert!(matches!(
            p.parse_response_text(r#"{"choices":"nope"}"#).unwrap_err(),
            Error::NoChoices
        ));
    }

    #[test]
    fn test_parse_response_text_missing_content() {
        let p = provider("http://localhost");
        let err = p
            .parse_response_text(r#"{"choices":[{"message":{"role":"assistant"}}]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::MissingContent));
    }
}
