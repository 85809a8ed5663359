//! 環境変数による設定取得（adapter 層）
//!
//! usecase は環境変数に直接依存せず、起動時にここで読んだ QcConfig を受け取る。

use common::ports::outbound::EnvResolver;

use crate::domain::QcConfig;

/// EnvResolver 経由で設定を一度だけ読み込む
pub fn load_config(env: &dyn EnvResolver) -> QcConfig {
    QcConfig::from_lookup(|name| env.var(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::StubEnvResolver;

    #[test]
    fn test_load_config_reads_through_resolver() {
        let env = StubEnvResolver::new(&[
            ("OPENAI_API_KEY", "sk-live"),
            ("OPENAI_MODEL", "deepseek-reasoner"),
        ]);
        let config = load_config(&env);
        assert_eq!(config.api_key.as_deref(), Some("sk-live"));
        assert_eq!(config.model, "deepseek-reasoner");
        assert_eq!(config.base_url, "https://api.deepseek.com");
    }
}
