//! LLMプロバイダの実装
//!
//! OpenAI Chat Completions 互換エンドポイントへの 1 回の同期呼び出しを提供します。

pub mod openai_compat;
pub mod provider;

pub use openai_compat::{ClientConfig, OpenAiCompatProvider, DEFAULT_TIMEOUT};
pub use provider::{LlmProvider, Message, Role};
