//! 評価プロンプトの組み立て（純粋関数、I/O なし）

use crate::domain::category::{label_for_key, ProcedureCategory};
use crate::domain::steps::ProcedureSteps;
use common::llm::Message;

/// 採点基準と出力形式を指示するシステムプロンプト
pub const SYSTEM_PROMPT: &str = r#"你是一名资深的手术质控专家，拥有丰富的临床经验和质控评估能力。

你的任务是对提供的手术操作步骤进行专业评估，从以下维度进行分析：
1. 操作合理性：手术步骤是否符合标准流程
2. 安全风险：识别潜在的手术风险点
3. 改进建议：提出具体的改进措施

评估标准：
- 100-90分：操作规范，无明显风险
- 89-75分：操作基本规范，有轻微改进空间
- 74-60分：操作存在问题，需要改进
- 59-0分：操作严重不规范，存在重大风险

请严格按照以下JSON格式输出结果，必须是有效的JSON，不要包含任何其他文字说明：

```json
{
  "total_score": 85,
  "risks": ["风险点1", "风险点2"],
  "suggestions": ["改进建议1", "改进建议2"],
  "risk_level": "Medium"
}
```

重要要求：
1. 只输出JSON格式的内容，不要有其他解释文字
2. risk_level的值只能是：Low（低风险）、Medium（中风险）、High（高风险）
3. total_score必须是0-100之间的数字"#;

fn user_prompt(label: &str, steps: &str) -> String {
    format!(
        "请评估以下{label}手术的操作步骤：\n\
         \n\
         手术类型：{label}\n\
         手术步骤：\n\
         {steps}\n\
         \n\
         请根据医学标准和安全规范，对上述手术步骤进行全面评估。"
    )
}

/// (system, user) の 2 メッセージを組み立てる
///
/// 未知のカテゴリキーは一般手術のラベルで組み立てる。同じ入力には常に同じ内容を返す。
pub fn build_evaluation_messages(steps: &ProcedureSteps, category_key: &str) -> [Message; 2] {
    let label = label_for_key(category_key);
    [
        Message::system(SYSTEM_PROMPT),
        Message::user(user_prompt(label, steps)),
    ]
}

/// 確認用にプロンプト全体とカテゴリ別の評価観点を整形する
pub fn format_evaluation_prompt(steps: &ProcedureSteps, category_key: &str) -> String {
    let [system, user] = build_evaluation_messages(steps, category_key);
    let guidance = ProcedureCategory::from_key(category_key)
        .unwrap_or_default()
        .guidance();
    format!(
        "=== System prompt ===\n{}\n\n=== User prompt ===\n{}\n\n=== Category guidance ===\n{}\n",
        system.content, user.content, guidance
    )
}
