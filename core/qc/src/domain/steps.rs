//! 手術手順テキストのドメイン型

use common::error::Error;

/// これより短いと評価の質が落ちる可能性がある（文字数）
pub const MIN_RECOMMENDED_CHARS: usize = 50;
/// これより長いとモデルの処理能力を超える可能性がある（文字数）
pub const MAX_RECOMMENDED_CHARS: usize = 2000;

/// 前後の空白を除いた、空でない手術手順テキスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureSteps(String);

/// 長さに関する注意（送信は止めない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthAdvisory {
    TooShort { chars: usize },
    TooLong { chars: usize },
}

impl std::fmt::Display for LengthAdvisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { chars } => write!(
                f,
                "procedure description is short ({} chars, under {}); assessment quality may suffer",
                chars, MIN_RECOMMENDED_CHARS
            ),
            Self::TooLong { chars } => write!(
                f,
                "procedure description is long ({} chars, over {}); it may exceed what the model handles well",
                chars, MAX_RECOMMENDED_CHARS
            ),
        }
    }
}

impl ProcedureSteps {
    /// 空・空白のみは入力エラー
    pub fn new(text: &str) -> Result<Self, Error> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::input("procedure steps are empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// 文字数（Unicode スカラー値単位）
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn length_advisory(&self) -> Option<LengthAdvisory> {
        let chars = self.char_count();
        if chars < MIN_RECOMMENDED_CHARS {
            Some(LengthAdvisory::TooShort { chars })
        } else if chars > MAX_RECOMMENDED_CHARS {
            Some(LengthAdvisory::TooLong { chars })
        } else {
            None
        }
    }
}

impl std::ops::Deref for ProcedureSteps {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ProcedureSteps {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
