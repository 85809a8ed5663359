//! アダプター（ポートの標準実装）

pub mod config;
pub mod provider_factory;
pub mod sigint;

pub use config::load_config;
pub use provider_factory::OpenAiCompatProviderFactory;
pub use sigint::install_interrupt_handler;
