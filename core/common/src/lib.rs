//! surgery-qc 共通ライブラリ
//!
//! エラー型、LLM プロバイダ、Outbound ポートと標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// LLMプロバイダ
pub mod llm;

/// Ports & Adapters のポート定義
pub mod ports;

/// ポートの標準実装
pub mod adapter;
