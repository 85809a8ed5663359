//! ユースケース層

pub mod app;
pub mod config_check;

pub use app::{QcDeps, QcUseCase};
pub use config_check::{ConfigCheckItem, ConfigReport};
