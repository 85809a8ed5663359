//! 標準環境変数解決実装（std::env を委譲）

use crate::ports::outbound::EnvResolver;
use std::env;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variable_is_none() {
        let r = StdEnvResolver;
        assert_eq!(r.var("SURGERY_QC_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}
