//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI / main）がアプリを呼び出すインターフェース
//! - outbound: usecase が外界（LLM プロバイダ生成）を使うための trait

pub mod inbound;
pub mod outbound;
