//! OpenAI 互換プロバイダを生成する ProviderFactory 実装

use common::error::Error;
use common::llm::{ClientConfig, LlmProvider, OpenAiCompatProvider};

use crate::ports::outbound::ProviderFactory;

/// 標準プロバイダファクトリ（/chat/completions 互換エンドポイント）
#[derive(Debug, Clone, Default)]
pub struct OpenAiCompatProviderFactory;

impl ProviderFactory for OpenAiCompatProviderFactory {
    fn create(&self, config: ClientConfig) -> Result<Box<dyn LlmProvider>, Error> {
        Ok(Box::new(OpenAiCompatProvider::new(config)?))
    }
}
