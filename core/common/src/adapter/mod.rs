//! アダプター（外界の I/O を trait で抽象化）
//!
//! usecase はこのモジュールの実装を ports 経由でのみ使う。
//! 実装は標準実装（Std*）やテスト用のモックを注入する。

pub mod file_json_log;
pub mod std_env_resolver;
pub mod std_fs;

pub use crate::ports::outbound::FileSystem;
pub use file_json_log::{FileJsonLog, LevelFilterLog, NoopLog};
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
