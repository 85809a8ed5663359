//! 環境変数解決 Outbound ポート
//!
//! 設定の読み込みはこの trait 経由でのみ環境変数にアクセスする。
//! 読み込みは起動時に一度だけ行い、以降は設定値を明示的に渡す。

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 変数の値を返す。未設定・空文字列は None。
    fn var(&self, name: &str) -> Option<String>;
}
