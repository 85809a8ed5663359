//! 手術カテゴリ（評価時のラベルと観点の選択に使う）

/// 手術カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProcedureCategory {
    Appendectomy,
    Cholecystectomy,
    GastricPerforation,
    /// 未知のキーのフォールバック先
    #[default]
    General,
}

impl ProcedureCategory {
    pub const ALL: [ProcedureCategory; 4] = [
        Self::Appendectomy,
        Self::Cholecystectomy,
        Self::GastricPerforation,
        Self::General,
    ];

    /// CLI の `--type` に使うキー
    pub fn key(&self) -> &'static str {
        match self {
            Self::Appendectomy => "appendectomy",
            Self::Cholecystectomy => "cholecystectomy",
            Self::GastricPerforation => "gastric_perforation",
            Self::General => "general",
        }
    }

    /// プロンプトに埋め込む表示名
    pub fn label(&self) -> &'static str {
        match self {
            Self::Appendectomy => "阑尾切除术",
            Self::Cholecystectomy => "胆囊切除术",
            Self::GastricPerforation => "胃穿孔修补术",
            Self::General => "一般手术",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn keys() -> [&'static str; 4] {
        Self::ALL.map(|c| c.key())
    }

    /// カテゴリ別の評価観点
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::Appendectomy => {
                "阑尾切除术评估要点：\n\
                 - 切口选择是否合适（McBurney点切口或腹腔镜）\n\
                 - 阑尾动脉处理是否得当\n\
                 - 阑尾根部结扎是否牢固\n\
                 - 腹腔冲洗是否充分\n\
                 - 是否有感染预防措施"
            }
            Self::Cholecystectomy => {
                "胆囊切除术评估要点：\n\
                 - Calot三角解剖是否清晰\n\
                 - 胆囊动脉和胆囊管识别是否准确\n\
                 - 电凝止血是否充分\n\
                 - 胆囊床渗血处理是否妥当\n\
                 - 腹腔镜操作是否规范"
            }
            Self::GastricPerforation => {
                "胃穿孔修补术评估要点：\n\
                 - 穿孔部位探查是否充分\n\
                 - 缝合方式是否合适（单层或双层）\n\
                 - 大网膜覆盖是否到位\n\
                 - 腹腔冲洗引流是否充分\n\
                 - 术后并发症预防措施"
            }
            Self::General => {
                "一般手术评估要点：\n\
                 - 手术指征是否明确\n\
                 - 操作步骤是否规范\n\
                 - 无菌原则是否遵守\n\
                 - 止血是否充分\n\
                 - 组织处理是否轻柔"
            }
        }
    }
}

/// キーから表示名を引く。未知のキーは一般手術のラベルになる（エラーにしない）。
pub fn label_for_key(key: &str) -> &'static str {
    ProcedureCategory::from_key(key).unwrap_or_default().label()
}

impl std::fmt::Display for ProcedureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_known() {
        for c in ProcedureCategory::ALL {
            assert_eq!(ProcedureCategory::from_key(c.key()), Some(c));
        }
        assert_eq!(
            ProcedureCategory::from_key("gastric_perforation"),
            Some(ProcedureCategory::GastricPerforation)
        );
    }

    #[test]
    fn test_from_key_is_exact() {
        assert_eq!(ProcedureCategory::from_key("Appendectomy"), None);
        assert_eq!(ProcedureCategory::from_key(" general"), None);
        assert_eq!(ProcedureCategory::from_key(""), None);
    }

    #[test]
    fn test_label_for_unknown_key_falls_back_to_general() {
        for key in ["", "hernia", "APPENDECTOMY", "general ", "未知"] {
            assert_eq!(label_for_key(key), "一般手术", "key: {:?}", key);
        }
        assert_eq!(label_for_key("cholecystectomy"), "胆囊切除术");
    }

    #[test]
    fn test_default_is_general() {
        assert_eq!(ProcedureCategory::default(), ProcedureCategory::General);
        assert_eq!(ProcedureCategory::General.to_string(), "general");
    }

    #[test]
    fn test_guidance_mentions_label() {
        for c in ProcedureCategory::ALL {
            assert!(c.guidance().starts_with(c.label()), "{:?}", c);
            assert!(c.guidance().lines().count() > 1);
        }
    }
}
