//! LLM プロバイダ生成 Outbound ポート
//!
//! usecase は検証済みの ClientConfig を渡してプロバイダを得る。
//! テストでは固定レスポンスを返すスタブを注入する。

use common::error::Error;
use common::llm::{ClientConfig, LlmProvider};

/// ClientConfig から LlmProvider を生成する Outbound ポート
pub trait ProviderFactory: Send + Sync {
    fn create(&self, config: ClientConfig) -> Result<Box<dyn LlmProvider>, Error>;
}
