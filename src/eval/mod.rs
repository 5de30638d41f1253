use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::ai::client::{GenerationRequest, TextGenerator};
use crate::ai::prompt::{self, PromptTemplate};
use crate::config::Config;
use crate::infrastructure::error::EvalError;

/// 论文文本的截断上限（字符数）
const PAPER_TEXT_LIMIT: usize = 4000;
/// 综合评估时单条评估结果的截断上限（字符数）
const EVALUATION_TEXT_LIMIT: usize = 2000;
/// 单篇评估调用的输出 token 上限
const EVALUATION_MAX_TOKENS: u32 = 800;
/// 综合评估调用的输出 token 上限
const SYNTHESIS_MAX_TOKENS: u32 = 1500;
/// 采样温度（两类调用共用，固定）
const TEMPERATURE: f32 = 0.3;

/// 编排策略
///
/// 调用间隔、退避基数和尝试次数都是普通配置值，调整策略无需改动控制流。
#[derive(Debug, Clone)]
pub struct EvalPolicy {
    pub model: String,
    pub pacing_delay: Duration,
    pub backoff_base: Duration,
    pub max_attempts: u32,
}

impl From<&Config> for EvalPolicy {
    fn from(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            pacing_delay: config.pacing_delay,
            backoff_base: config.backoff_base,
            max_attempts: config.max_attempts,
        }
    }
}

/// 论文反馈编排器
///
/// 按顺序将用户论文与每篇参考论文对比评估，再把所有评估结果
/// 综合为一份最终评估。流程为单任务顺序执行，没有并发。
pub struct FeedbackOrchestrator {
    generator: Arc<dyn TextGenerator>,
    policy: EvalPolicy,
}

impl FeedbackOrchestrator {
    pub fn new(generator: Arc<dyn TextGenerator>, policy: EvalPolicy) -> Self {
        Self { generator, policy }
    }

    /// 将用户论文与单篇参考论文对比评估
    ///
    /// 两段文本各自截断到 4000 字符后填入评估模板作为系统提示词。
    /// 限流错误按线性退避重试（第 n 次重试等待 backoff_base × n，
    /// 总尝试次数受 max_attempts 限制），其余错误直接向上传播。
    pub async fn evaluate_against_reference(
        &self,
        user_text: &str,
        reference_text: &str,
    ) -> Result<String, EvalError> {
        let user_text = prompt::truncate_chars(user_text, PAPER_TEXT_LIMIT);
        let reference_text = prompt::truncate_chars(reference_text, PAPER_TEXT_LIMIT);

        let system = PromptTemplate::new("individual", prompt::INDIVIDUAL_PAPER_PROMPT).render(&[
            ("user_info_text", user_text.as_str()),
            ("reference_paper", reference_text.as_str()),
        ]);

        let request = GenerationRequest {
            model: self.policy.model.clone(),
            max_tokens: EVALUATION_MAX_TOKENS,
            temperature: TEMPERATURE,
            system,
            user_message: prompt::EVALUATE_USER_MESSAGE.to_string(),
        };

        let mut attempt: u32 = 0;
        loop {
            match self.generator.generate(&request).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_rate_limited() && attempt + 1 < self.policy.max_attempts => {
                    let wait = self.policy.backoff_base * (attempt + 1);
                    warn!(
                        attempt = attempt + 1,
                        max_attempts = self.policy.max_attempts,
                        wait_secs = wait.as_secs(),
                        "评估调用被限流，等待后重试"
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
                Err(e) => {
                    error!(error = %e, "单篇论文评估失败");
                    return Err(e);
                }
            }
        }
    }

    /// 综合所有单篇评估结果，生成最终评估
    ///
    /// 每条评估结果截断到 2000 字符，按原顺序以空行连接后填入综合模板。
    /// 该调用不重试，任何失败都直接向上传播。
    pub async fn synthesize_final(&self, evaluations: &[String]) -> Result<String, EvalError> {
        let limited: Vec<String> = evaluations
            .iter()
            .map(|evaluation| prompt::truncate_chars(evaluation, EVALUATION_TEXT_LIMIT))
            .collect();
        let joined = limited.join("\n\n");

        let system = PromptTemplate::new("final", prompt::FINAL_EVAL_PROMPT)
            .render(&[("individual_evaluations", joined.as_str())]);

        let request = GenerationRequest {
            model: self.policy.model.clone(),
            max_tokens: SYNTHESIS_MAX_TOKENS,
            temperature: TEMPERATURE,
            system,
            user_message: prompt::SYNTHESIS_USER_MESSAGE.to_string(),
        };

        match self.generator.generate(&request).await {
            Ok(text) => Ok(text),
            Err(e) => {
                error!(error = %e, "最终评估生成失败");
                Err(e)
            }
        }
    }

    /// 论文评估与反馈生成主流程
    ///
    /// 按顺序评估每篇参考论文，调用之间插入固定间隔以避免触发远程服务
    /// 限流，最后综合所有评估结果。任一环节不可恢复的失败都会中止整个
    /// 流程，不返回部分结果。
    pub async fn generate_paper_feedback(
        &self,
        user_text: &str,
        reference_documents: &[String],
    ) -> Result<String, EvalError> {
        info!("论文评估与反馈生成开始");

        let mut evaluations = Vec::with_capacity(reference_documents.len());
        for (i, reference) in reference_documents.iter().enumerate() {
            info!(document = i + 1, "单篇论文评估开始");
            let evaluation = self
                .evaluate_against_reference(user_text, reference)
                .await
                .map_err(|e| {
                    error!(document = i + 1, error = %e, "论文评估流程失败");
                    e
                })?;
            evaluations.push(evaluation);
            info!(document = i + 1, "单篇论文评估完成");
            // 调用间隔
            tokio::time::sleep(self.policy.pacing_delay).await;
        }

        info!("最终评估生成开始");
        let final_evaluation = self.synthesize_final(&evaluations).await?;
        info!("最终评估生成完成");

        Ok(final_evaluation)
    }
}
