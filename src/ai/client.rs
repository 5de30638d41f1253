use crate::ai::http::shared_client;
use crate::infrastructure::error::{classify_api_failure, EvalError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 一次文本生成调用的参数
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub system: String,
    pub user_message: String,
}

/// 文本生成服务接口
///
/// 编排器通过该接口访问远程服务，作为显式注入的依赖传入，
/// 测试时可替换为确定性的桩实现。
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 发送一次生成请求，返回响应中第一个内容块的文本
    async fn generate(&self, request: &GenerationRequest) -> Result<String, EvalError>;
}

/// Anthropic Messages API 请求
#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

/// Anthropic 消息
#[derive(Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Anthropic 响应
#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContentBlock>,
}

/// Anthropic 内容块
#[derive(Deserialize)]
struct AnthropicContentBlock {
    #[serde(rename = "type")]
    _type: String,
    text: Option<String>,
}

/// Anthropic Messages API 客户端
///
/// 默认 URL: https://api.anthropic.com/v1/messages
/// 环境变量: AI_PAPER_EVAL_API_KEY（或 ANTHROPIC_API_KEY）
pub struct AnthropicClient {
    client: &'static reqwest::Client,
    api_url: String,
    api_key: String,
}

impl AnthropicClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: shared_client(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for AnthropicClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, EvalError> {
        let payload = AnthropicRequest {
            model: &request.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            system: &request.system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: &request.user_message,
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", self.api_key.as_str())
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(classify_api_failure(status, &text));
        }

        let api_response: AnthropicResponse = response.json().await?;

        // 仅使用第一个内容块的文本
        api_response
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or(EvalError::EmptyResponse)
    }
}
