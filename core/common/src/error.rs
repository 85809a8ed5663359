//! エラーハンドリング
//!
//! 全レイヤーで共通の `Error` 型。終了コードへの変換もここで行う。

/// 失敗時の終了コード（種別によらず 1）
pub const EXIT_FAILURE: i32 = 1;

/// エラー型
///
/// 設定・入力・通信・レスポンス契約違反の 4 系統を区別する。
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// コマンドライン引数の誤り（usage を併せて表示する）
    #[error("{0}")]
    InvalidArgument(String),

    /// 手術手順テキストなど入力内容の誤り
    #[error("Input error: {0}")]
    Input(String),

    /// API キー未設定・形式不正などの設定エラー
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Io(String),

    /// シリアライズ失敗など、ローカルでの JSON 処理エラー
    #[error("{0}")]
    Json(String),

    /// 接続・DNS・タイムアウトなど HTTP レスポンスに到達しなかった失敗
    #[error("Network error: {0}")]
    Transport(String),

    /// 2xx 以外のステータス
    #[error("Chat completions error (HTTP {status}): {body}")]
    Http { status: u16, body: String },

    /// レスポンス本文が JSON として読めない
    #[error("Failed to parse response JSON: {0}")]
    ResponseJson(String),

    #[error("Response contains no choices")]
    NoChoices,

    #[error("Response choice has no message content")]
    MissingContent,

    /// モデルが返した本文（JSON テキスト）が JSON オブジェクトとして読めない
    #[error("Failed to parse evaluation JSON: {0}")]
    EvaluationJson(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid field '{field}': expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// usage を表示すべき引数エラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// レスポンス契約違反（モデル出力の形式不正）か
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::ResponseJson(_)
                | Self::NoChoices
                | Self::MissingContent
                | Self::EvaluationJson(_)
                | Self::MissingField(_)
                | Self::InvalidField { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
