//! surgery-qc コマンドの enum（Command Pattern）
//!
//! 設定確認・プロンプト表示・評価などの分岐を enum で明示する。

use crate::domain::ProcedureCategory;
use std::path::PathBuf;

/// 手術手順テキストの入力元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepsSource {
    File(PathBuf),
    Text(String),
}

impl StepsSource {
    /// ログ・冗長表示用の短い説明
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => format!("file {}", path.display()),
            Self::Text(_) => "command-line text".to_string(),
        }
    }
}

/// surgery-qc の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum QcCommand {
    /// ヘルプ表示
    Help,
    /// 設定を検証して終了（評価しない）
    ConfigCheck,
    /// 疎通確認用の小さなプロンプトを送る
    TestConnection,
    /// 送信予定のプロンプトを表示する（ネットワーク不要）
    ShowPrompt {
        source: StepsSource,
        category: ProcedureCategory,
    },
    /// 手術手順を評価する
    Evaluate {
        source: StepsSource,
        category: ProcedureCategory,
        output: Option<PathBuf>,
        verbose: bool,
    },
}

impl QcCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::ConfigCheck => "config-check",
            Self::TestConnection => "test-connection",
            Self::ShowPrompt { .. } => "show-prompt",
            Self::Evaluate { .. } => "evaluate",
        }
    }
}
