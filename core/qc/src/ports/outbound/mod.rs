//! Outbound ポート: usecase が外界を使うための trait

pub mod provider_factory;

pub use provider_factory::ProviderFactory;
