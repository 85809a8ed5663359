//! 評価結果の型と、モデル出力（JSON テキスト）の検証・正規化
//!
//! 必須フィールド（total_score / risks / suggestions）の欠落は失敗にする。
//! total_score の範囲外は警告のみで受け入れる。

use common::error::Error;
use serde::Serialize;
use serde_json::{Map, Value};

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// リスクレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unknown => "Unknown",
        }
    }

    /// 大文字小文字を区別せずに解釈する
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 正規化済みの評価結果（出力 JSON のキー順はフィールド順）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub total_score: f64,
    pub risks: Vec<String>,
    pub suggestions: Vec<String>,
    pub risk_level: RiskLevel,
}

impl EvaluationResult {
    pub fn score_in_range(&self) -> bool {
        (SCORE_MIN..=SCORE_MAX).contains(&self.total_score)
    }

    /// 整形済み JSON（非 ASCII はそのまま出力）
    pub fn to_pretty_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::json(format!("Failed to serialize result: {}", e)))
    }
}

/// 正規化時の警告（結果は受け入れる）
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizeWarning {
    ScoreOutOfRange(f64),
    UnrecognizedRiskLevel(String),
}

impl std::fmt::Display for NormalizeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScoreOutOfRange(score) => write!(
                f,
                "total_score {} is outside [{}, {}]",
                score, SCORE_MIN, SCORE_MAX
            ),
            Self::UnrecognizedRiskLevel(raw) => {
                write!(f, "unrecognized risk_level {}; using Unknown", raw)
            }
        }
    }
}

/// 正規化の結果
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub result: EvaluationResult,
    pub warnings: Vec<NormalizeWarning>,
}

/// モデルの回答本文（JSON テキスト）を検証して EvaluationResult にする
pub fn normalize_evaluation(content: &str) -> Result<Normalized, Error> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| Error::EvaluationJson(e.to_string()))?;
    let obj = value
        .as_object()
        .ok_or_else(|| Error::EvaluationJson("expected a JSON object".to_string()))?;
    normalize_object(obj)
}

fn normalize_object(obj: &Map<String, Value>) -> Result<Normalized, Error> {
    let score = require(obj, "total_score")?;
    let risks = require(obj, "risks")?;
    let suggestions = require(obj, "suggestions")?;

    let total_score = score.as_f64().ok_or(Error::InvalidField {
        field: "total_score",
        expected: "a number",
    })?;
    let risks = text_list(risks, "risks")?;
    let suggestions = text_list(suggestions, "suggestions")?;

    let mut warnings = Vec::new();
    let risk_level = match obj.get("risk_level") {
        None | Some(Value::Null) => RiskLevel::Unknown,
        Some(Value::String(s)) => RiskLevel::parse(s).unwrap_or_else(|| {
            warnings.push(NormalizeWarning::UnrecognizedRiskLevel(format!("{:?}", s)));
            RiskLevel::Unknown
        }),
        Some(other) => {
            warnings.push(NormalizeWarning::UnrecognizedRiskLevel(other.to_string()));
            RiskLevel::Unknown
        }
    };

    let result = EvaluationResult {
        total_score,
        risks,
        suggestions,
        risk_level,
    };
    if !result.score_in_range() {
        warnings.insert(0, NormalizeWarning::ScoreOutOfRange(total_score));
    }
    Ok(Normalized { result, warnings })
}

fn require<'a>(obj: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, Error> {
    obj.get(field).ok_or(Error::MissingField(field))
}

/// 文字列はそのまま、それ以外の要素は JSON 表記にする
fn text_list(value: &Value, field: &'static str) -> Result<Vec<String>, Error> {
    let items = value.as_array().ok_or(Error::InvalidField {
        field,
        expected: "an array",
    })?;
    Ok(items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect())
}
