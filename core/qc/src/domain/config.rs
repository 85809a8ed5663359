//! 起動時に一度だけ読み込む設定値
//!
//! 読み込み（環境変数）は adapter 層で行い、ここでは値と検証だけを持つ。

use common::error::Error;
use common::llm::ClientConfig;
use std::path::PathBuf;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const DEBUG_VAR: &str = "DEBUG";
pub const LOG_FILE_VAR: &str = "SURGERY_QC_LOG";

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_MODEL: &str = "deepseek-chat";

const API_KEY_PREFIX: &str = "sk-";

/// アプリ設定
#[derive(Debug, Clone, PartialEq)]
pub struct QcConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub debug: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for QcConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            debug: false,
            log_file: None,
        }
    }
}

impl QcConfig {
    /// 変数名 → 値 の参照関数から組み立てる（未設定は既定値）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_key: lookup(API_KEY_VAR),
            base_url: lookup(BASE_URL_VAR).unwrap_or(defaults.base_url),
            model: lookup(MODEL_VAR).unwrap_or(defaults.model),
            debug: lookup(DEBUG_VAR)
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            log_file: lookup(LOG_FILE_VAR).map(PathBuf::from),
        }
    }

    /// API キーの存在と形式（`sk-` 接頭辞）を検証する
    pub fn validated_api_key(&self) -> Result<&str, Error> {
        let key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::config(format!("{} is not set", API_KEY_VAR)))?;
        if !key.starts_with(API_KEY_PREFIX) {
            return Err(Error::config(format!(
                "{} has an invalid format (expected '{}' prefix)",
                API_KEY_VAR, API_KEY_PREFIX
            )));
        }
        Ok(key)
    }

    /// 検証済みのクライアント設定
    pub fn client_config(&self) -> Result<ClientConfig, Error> {
        let key = self.validated_api_key()?;
        Ok(ClientConfig::new(key, &self.base_url, &self.model))
    }
}
