use crate::domain::{
    build_evaluation_messages, format_evaluation_prompt, normalize_evaluation, EvaluationResult,
    Normalized, ProcedureCategory, ProcedureSteps, QcConfig, StepsSource,
};
use crate::ports::outbound::ProviderFactory;
use common::error::Error;
use common::llm::Message;
use common::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// usecase が使う依存（wiring が組み立てて渡す）
pub struct QcDeps {
    pub fs: Arc<dyn FileSystem>,
    pub log: Arc<dyn Log>,
    pub providers: Arc<dyn ProviderFactory>,
    /// 起動時に一度だけ読み込んだ設定
    pub config: QcConfig,
}

/// surgery-qc のユースケース（アダプター経由で I/O を行う）
pub struct QcUseCase {
    pub(crate) deps: QcDeps,
}

impl QcUseCase {
    pub fn new(deps: QcDeps) -> Self {
        Self { deps }
    }

    pub fn config(&self) -> &QcConfig {
        &self.deps.config
    }

    /// ファイルまたは引数から手術手順を読み込む（空なら入力エラー）
    pub fn read_steps(&self, source: &StepsSource) -> Result<ProcedureSteps, Error> {
        match source {
            StepsSource::File(path) => {
                let text = self.deps.fs.read_to_string(path)?;
                ProcedureSteps::new(&text)
            }
            StepsSource::Text(text) => ProcedureSteps::new(text),
        }
    }

    /// 1 回の呼び出しで評価し、正規化した結果を返す
    ///
    /// 長さの注意・スコア範囲外などの警告は stderr に出すだけで処理は続ける。
    pub fn evaluate(
        &self,
        steps: &ProcedureSteps,
        category: ProcedureCategory,
    ) -> Result<Normalized, Error> {
        if let Some(advisory) = steps.length_advisory() {
            self.warn(&advisory.to_string(), "input");
        }

        let client_config = self.deps.config.client_config()?;
        let messages = build_evaluation_messages(steps, category.key());
        let provider = self.deps.providers.create(client_config)?;

        self.log(
            LogRecord::new(LogLevel::Debug, "evaluation request")
                .kind("evaluation")
                .field("provider", provider.name())
                .field("model", provider.model())
                .field("category", category.key())
                .field("chars", steps.char_count()),
        );

        let started = Instant::now();
        let content = provider.complete(&messages).map_err(|e| {
            self.log(
                LogRecord::new(LogLevel::Error, e.to_string())
                    .kind("error")
                    .field("elapsed_ms", started.elapsed().as_millis() as u64),
            );
            e
        })?;
        self.log(
            LogRecord::new(LogLevel::Debug, "evaluation response")
                .kind("evaluation")
                .field("elapsed_ms", started.elapsed().as_millis() as u64)
                .field("content_chars", content.chars().count()),
        );

        let normalized = normalize_evaluation(&content)?;
        for warning in &normalized.warnings {
            self.warn(&warning.to_string(), "evaluation");
        }

        self.log(
            LogRecord::new(LogLevel::Info, "evaluation completed")
                .kind("evaluation")
                .field("total_score", normalized.result.total_score)
                .field("risk_level", normalized.result.risk_level.as_str())
                .field("risks", normalized.result.risks.len())
                .field("suggestions", normalized.result.suggestions.len()),
        );
        Ok(normalized)
    }

    /// 結果を整形済み JSON としてファイルに保存する
    pub fn save_result(&self, result: &EvaluationResult, path: &Path) -> Result<(), Error> {
        let json = result.to_pretty_json()?;
        self.deps.fs.write(path, &format!("{}\n", json))
    }

    /// 送信予定のプロンプト全体（ネットワーク・API キー不要）
    pub fn show_prompt(&self, steps: &ProcedureSteps, category: ProcedureCategory) -> String {
        format_evaluation_prompt(steps, category.key())
    }

    /// 疎通確認: 小さなプロンプトを送り、モデルの回答をそのまま返す
    pub fn test_connection(&self) -> Result<String, Error> {
        let client_config = self.deps.config.client_config()?;
        let provider = self.deps.providers.create(client_config)?;
        let messages = [
            Message::system("你是一个测试助手，请返回JSON格式: {\"status\": \"ok\"}"),
            Message::user("测试连接"),
        ];
        let answer = provider.complete(&messages)?;
        self.log(
            LogRecord::new(LogLevel::Info, "connection test succeeded")
                .kind("connection")
                .field("model", provider.model()),
        );
        Ok(answer)
    }

    pub(crate) fn warn(&self, message: &str, kind: &str) {
        eprintln!("Warning: {}", message);
        self.log(LogRecord::new(LogLevel::Warn, message).kind(kind));
    }

    /// ログ出力の失敗はコマンドの失敗にしない
    pub(crate) fn log(&self, record: LogRecord) {
        let _ = self.deps.log.log(&record.layer("usecase"));
    }
}
