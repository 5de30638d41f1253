/// 单篇参考论文评估的系统提示词模板
pub const INDIVIDUAL_PAPER_PROMPT: &str = r#"# 지시문
당신은 논문 평가 전문가 '김논평'입니다. 아래 제시된 사용자의 논문과 참고 논문을 비교하여 개선 제안을 하는 것이 당신의 역할입니다.

# 제약조건
- **모든 출력은 Markdown을 적극 활용**하여 작성합니다.
- 코드 블록은 사용하지 않습니다.
- 참고 논문의 핵심 내용과 전략을 파악하여 사용자 논문의 개선점을 제시합니다.
- 순서 서식을 사용하지 않고 최대한 문장의 형식으로 출력해야 합니다.

---

# 사용자의 논문
{{user_info_text}}

---

# 참고 논문
{{reference_paper}}

---

# 출력 형태
### 참고 논문 기반 개선 제안
[참고 논문을 바탕으로 사용자 논문의 개선점을 구체적으로 제시합니다. 평가의 기준이 되는 내용이 참고 논문의 어떤 내용을 기준으로 했는지도 함께 포함하여야 합니다.]"#;

/// 最终综合评估的系统提示词模板
pub const FINAL_EVAL_PROMPT: &str = r#"# 지시문
당신은 논문 평가 전문가 '김논평'입니다. 아래 제시된 개별 평가 결과들을 종합하여 최종 평가와 개선 제안을 하는 것이 당신의 역할입니다.

# 제약조건
- **모든 출력은 Markdown을 적극 활용**하여 작성합니다.
- 코드 블록은 사용하지 않습니다.
- 개별 평가 결과들을 종합하여 일관된 최종 평가를 제시합니다.
- 순서 서식을 사용하지 않고 최대한 문장의 형식으로 출력해야 합니다.

---

# 개별 평가 결과
{{individual_evaluations}}

---

# 출력 형태
### 최종 논문 분석 및 개선 방향 제안
[개별 평가 결과를 종합하여 전체적인 평가와 구체적인 개선 방향을 제시합니다.]"#;

/// 单篇评估调用的用户消息（固定）
pub const EVALUATE_USER_MESSAGE: &str = "논문을 평가하고 개선 방향을 제안해주세요.";

/// 综合评估调用的用户消息（固定）
pub const SYNTHESIS_USER_MESSAGE: &str = "개별 평가 결과를 종합하여 최종 평가를 제시해주세요.";

/// 提示词模板
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub template: String,
}

impl PromptTemplate {
    /// 创建新的模板
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }

    /// 渲染模板，将每个 {{变量}} 替换为给定的值
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let mut result = self.template.clone();
        for (var, value) in values {
            result = result.replace(&format!("{{{{{}}}}}", var), value);
        }
        result
    }
}

/// 按字符数截断文本
///
/// 超过 max_chars 个字符时保留前 max_chars 个字符并追加省略号标记，
/// 未超过则原样返回。按字符计数而非字节，避免截断多字节文本。
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut truncated: String = text.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_template_render() {
        let template = PromptTemplate::new("test", "Hello {{name}}, welcome to {{place}}");
        let result = template.render(&[("name", "Alice"), ("place", "Wonderland")]);
        assert_eq!(result, "Hello Alice, welcome to Wonderland");
    }

    #[test]
    fn test_individual_prompt_render() {
        let template = PromptTemplate::new("individual", INDIVIDUAL_PAPER_PROMPT);
        let result = template.render(&[
            ("user_info_text", "사용자 논문 본문"),
            ("reference_paper", "참고 논문 본문"),
        ]);
        assert!(result.contains("사용자 논문 본문"));
        assert!(result.contains("참고 논문 본문"));
        assert!(!result.contains("{{user_info_text}}"));
        assert!(!result.contains("{{reference_paper}}"));
    }

    #[test]
    fn test_final_prompt_render() {
        let template = PromptTemplate::new("final", FINAL_EVAL_PROMPT);
        let result = template.render(&[("individual_evaluations", "평가 1\n\n평가 2")]);
        assert!(result.contains("평가 1\n\n평가 2"));
        assert!(!result.contains("{{individual_evaluations}}"));
    }

    #[test]
    fn test_truncate_chars_under_limit() {
        assert_eq!(truncate_chars("short", 4000), "short");
    }

    #[test]
    fn test_truncate_chars_at_limit() {
        let text = "a".repeat(4000);
        assert_eq!(truncate_chars(&text, 4000), text);
    }

    #[test]
    fn test_truncate_chars_over_limit() {
        let text = format!("{}{}", "a".repeat(4000), "b".repeat(500));
        let truncated = truncate_chars(&text, 4000);
        assert_eq!(truncated, format!("{}...", "a".repeat(4000)));
        assert_eq!(truncated.chars().count(), 4003);
    }

    #[test]
    fn test_truncate_chars_counts_characters_not_bytes() {
        // 3 字节字符按 1 个字符计
        let text = "가".repeat(10);
        assert_eq!(truncate_chars(&text, 10), text);

        let truncated = truncate_chars(&text, 5);
        assert_eq!(truncated, format!("{}...", "가".repeat(5)));
    }
}
