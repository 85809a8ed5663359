//! surgery-qc 固有のドメイン型（型と不変条件）

pub mod category;
pub mod command;
pub mod config;
pub mod evaluation;
pub mod prompt;
pub mod steps;

pub use category::{label_for_key, ProcedureCategory};
pub use command::{QcCommand, StepsSource};
pub use config::QcConfig;
pub use evaluation::{
    normalize_evaluation, EvaluationResult, NormalizeWarning, Normalized, RiskLevel,
};
pub use prompt::{build_evaluation_messages, format_evaluation_prompt};
pub use steps::{LengthAdvisory, ProcedureSteps};
