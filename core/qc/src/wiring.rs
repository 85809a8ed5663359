//! 配線: 標準アダプタで App を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, LevelFilterLog, NoopLog, StdEnvResolver, StdFileSystem};
use common::ports::outbound::{EnvResolver, FileSystem, Log, LogLevel};

use crate::adapter::{load_config, OpenAiCompatProviderFactory};
use crate::domain::QcConfig;
use crate::ports::outbound::ProviderFactory;
use crate::usecase::{QcDeps, QcUseCase};

/// main が使うアプリ一式
pub struct App {
    pub use_case: QcUseCase,
    pub logger: Arc<dyn Log>,
}

/// 配線: 環境変数から設定を一度だけ読み、標準アダプタで App を組み立てる
pub fn wire_qc() -> App {
    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let config = load_config(env.as_ref());
    wire_with(config, Arc::new(StdFileSystem), Arc::new(OpenAiCompatProviderFactory))
}

/// 設定と差し替え可能なアダプタから App を組み立てる
pub fn wire_with(
    config: QcConfig,
    fs: Arc<dyn FileSystem>,
    providers: Arc<dyn ProviderFactory>,
) -> App {
    let logger = build_logger(&config, Arc::clone(&fs));
    let use_case = QcUseCase::new(QcDeps {
        fs,
        log: Arc::clone(&logger),
        providers,
        config,
    });
    App { use_case, logger }
}

/// SURGERY_QC_LOG があれば JSONL ファイルへ、DEBUG=true なら debug レコードも残す
fn build_logger(config: &QcConfig, fs: Arc<dyn FileSystem>) -> Arc<dyn Log> {
    match config.log_file {
        Some(ref path) => {
            let max_level = if config.debug {
                LogLevel::Debug
            } else {
                LogLevel::Info
            };
            Arc::new(LevelFilterLog::new(
                Arc::new(FileJsonLog::new(fs, path)),
                max_level,
            ))
        }
        None => Arc::new(NoopLog),
    }
}
