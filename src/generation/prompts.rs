// Prompt templates for chat-completions interactions
//
// Prompts are versioned for reproducibility; the format rules the response
// validator enforces (3 lines, ≤12 words, 함/임 endings) live here as
// instructions to the model.

use std::collections::HashMap;

/// Prompt template structure
pub struct PromptTemplate {
    pub name: String,
    pub version: String,
    pub system: String,
    pub user_template: String,
}

impl PromptTemplate {
    /// Render the user template, substituting `{{name}}` placeholders
    pub fn render(&self, variables: &HashMap<String, String>) -> String {
        let mut rendered = self.user_template.clone();
        for (name, value) in variables {
            rendered = rendered.replace(&format!("{{{{{}}}}}", name), value);
        }
        rendered
    }
}

pub mod library {
    use super::PromptTemplate;

    pub fn leadership_summary() -> PromptTemplate {
        PromptTemplate {
            name: "leadership_summary".to_string(),
            version: "1.0.0".to_string(),
            system: "당신은 리더십 평가 의견을 세 문장으로 요약하는 전문가입니다. \
                     반드시 정확히 3개의 문장을 한 줄에 하나씩 출력하세요. \
                     각 문장은 12단어 이하이며 '함' 또는 '임'으로 끝나야 합니다. \
                     번호, 머리말, 설명 없이 문장만 출력하세요."
                .to_string(),
            user_template: "강점 의견: {{strengths}}\n\
                            약점 의견: {{weaknesses}}\n\n\
                            첫 번째 문장은 강점 기반 특성, \
                            두 번째 문장은 보완이 필요한 특성, \
                            세 번째 문장은 종합 프로필을 다루세요."
                .to_string(),
        }
    }
}
