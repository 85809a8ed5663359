//! 設定確認（--config-check）
//!
//! API キーの存在と形式を検証し、項目ごとの結果を返す。評価は行わない。

use crate::domain::config::{API_KEY_VAR, BASE_URL_VAR, MODEL_VAR};
use crate::usecase::app::QcUseCase;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};

/// 1 項目分の確認結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigCheckItem {
    pub name: &'static str,
    pub ok: bool,
    pub detail: String,
}

impl std::fmt::Display for ConfigCheckItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = if self.ok { "✓" } else { "✗" };
        write!(f, "{} {}: {}", mark, self.name, self.detail)
    }
}

/// 確認結果の一覧。API キーが不正なら error を持ち、以降の項目は含まない。
#[derive(Debug)]
pub struct ConfigReport {
    pub items: Vec<ConfigCheckItem>,
    pub error: Option<Error>,
}

impl ConfigReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<(), Error> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl QcUseCase {
    pub fn config_check(&self) -> ConfigReport {
        let config = self.config();
        let mut items = Vec::new();

        if let Err(e) = config.validated_api_key() {
            let missing = config
                .api_key
                .as_deref()
                .map_or(true, |k| k.trim().is_empty());
            let detail = if missing {
                "not set".to_string()
            } else {
                "invalid format (expected 'sk-' prefix)".to_string()
            };
            items.push(ConfigCheckItem {
                name: API_KEY_VAR,
                ok: false,
                detail,
            });
            self.log(
                LogRecord::new(LogLevel::Warn, e.to_string()).kind("config"),
            );
            return ConfigReport {
                items,
                error: Some(e),
            };
        }

        items.push(ConfigCheckItem {
            name: API_KEY_VAR,
            ok: true,
            detail: "set, format looks valid".to_string(),
        });
        items.push(ConfigCheckItem {
            name: MODEL_VAR,
            ok: true,
            detail: config.model.clone(),
        });
        items.push(ConfigCheckItem {
            name: BASE_URL_VAR,
            ok: true,
            detail: config.base_url.clone(),
        });
        self.log(LogRecord::new(LogLevel::Info, "configuration valid").kind("config"));
        ConfigReport { items, error: None }
    }
}
