//! テスト用のスタブ（環境変数・メモリ FS・プロバイダ）と共通ヘルパ


use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use common::error::Error;
use common::llm::{ClientConfig, LlmProvider, Message, OpenAiCompatProvider};
use common::ports::outbound::{EnvResolver, FileSystem};
use serde_json::{json, Value};

use crate::domain::QcConfig;
use crate::ports::outbound::ProviderFactory;
use crate::wiring::{wire_with, App};

/// 固定の値を返す EnvResolver
pub struct StubEnvResolver {
    vars: HashMap<String, String>,
}

impl StubEnvResolver {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            vars: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl EnvResolver for StubEnvResolver {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).filter(|v| !v.is_empty()).cloned()
    }
}

/// メモリ上の FileSystem（追記先は捨てる）
#[derive(Default)]
pub struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    pub fn with_file(path: &str, contents: &str) -> Self {
        let fs = Self::default();
        fs.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), contents.to_string());
        fs
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        self.get(&path.to_string_lossy())
            .ok_or_else(|| Error::io_msg(format!("File not found: '{}'", path.display())))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> Result<(), Error> {
        Ok(())
    }

    fn open_append(&self, _path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        Ok(Box::new(std::io::sink()))
    }
}

/// HTTP だけを差し替えたプロバイダ（payload 生成と本文抽出は本物を使う）
struct StubProvider {
    inner: OpenAiCompatProvider,
    reply: Result<String, Error>,
    sent: Arc<Mutex<Vec<Value>>>,
}

impl LlmProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn model(&self) -> &str {
        self.inner.model()
    }

    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
        self.inner.make_request_payload(messages)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let body: Value = serde_json::from_str(request_json).unwrap();
        self.sent.lock().unwrap().push(body);
        self.reply.clone()
    }

    fn parse_response_text(&self, response_json: &str) -> Result<String, Error> {
        self.inner.parse_response_text(response_json)
    }
}

/// 固定のレスポンス本文（またはエラー）を返すプロバイダを作るファクトリ
pub struct StubProviderFactory {
    reply: Result<String, Error>,
    pub configs: Mutex<Vec<ClientConfig>>,
    pub sent: Arc<Mutex<Vec<Value>>>,
}

impl StubProviderFactory {
    /// 生のレスポンス本文を返す
    pub fn body(body: impl Into<String>) -> Self {
        Self::reply(Ok(body.into()))
    }

    /// モデルの回答本文を choices[0].message.content に包んで返す
    pub fn content(content: impl Into<String>) -> Self {
        Self::body(completion_body(&content.into()))
    }

    pub fn failing(err: Error) -> Self {
        Self::reply(Err(err))
    }

    fn reply(reply: Result<String, Error>) -> Self {
        Self {
            reply,
            configs: Mutex::new(Vec::new()),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn request_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl ProviderFactory for StubProviderFactory {
    fn create(&self, config: ClientConfig) -> Result<Box<dyn LlmProvider>, Error> {
        self.configs.lock().unwrap().push(config.clone());
        Ok(Box::new(StubProvider {
            inner: OpenAiCompatProvider::new(config)?,
            reply: self.reply.clone(),
            sent: Arc::clone(&self.sent),
        }))
    }
}

/// Chat Completions 形式のレスポンス本文
pub fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

/// 有効な API キーを持つ設定
pub fn valid_config() -> QcConfig {
    QcConfig {
        api_key: Some("sk-test".to_string()),
        ..Default::default()
    }
}

/// スタブで App を組み立てる
pub fn app_with(
    config: QcConfig,
    fs: Arc<MemoryFileSystem>,
    providers: Arc<StubProviderFactory>,
) -> App {
    wire_with(config, fs, providers)
}

pub const APPENDECTOMY_STEPS: &str = "1. 患者全麻后取仰卧位
2. 常规消毒铺巾
3. 在McBurney点作斜切口
4. 逐层切开至腹膜
5. 探查阑尾位置和炎症程度
6. 分离阑尾周围粘连
7. 结扎阑尾动脉
8. 在阑尾根部用丝线结扎
9. 切除阑尾
10. 检查止血情况
11. 生理盐水冲洗腹腔
12. 逐层缝合切口";

pub const SCENARIO_CONTENT: &str = r#"{"total_score":85,"risks":["术中出血风险"],"suggestions":["加强止血"],"risk_level":"Medium"}"#;
