use thiserror::Error;

/// 评估错误类型
#[derive(Error, Debug)]
pub enum EvalError {
    #[error("远程服务限流: 状态码 {status} - {message}")]
    RateLimited { status: u16, message: String },

    #[error("远程服务错误: 状态码 {status} - {message}")]
    Api { status: u16, message: String },

    #[error("网络错误: {0}")]
    Network(#[from] reqwest::Error),

    #[error("远程服务未返回有效内容")]
    EmptyResponse,
}

impl EvalError {
    /// 检查错误是否为限流错误（唯一可重试的类别）
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, EvalError::RateLimited { .. })
    }
}

/// 将远程服务的失败响应分类为带标签的错误类型
///
/// 限流检测同时识别 HTTP 429 状态码和响应体中的 `rate_limit_error` 子串。
/// 子串匹配较为脆弱，可能漏掉措辞不同的限流错误，因此检测逻辑全部集中在
/// 此函数内，便于后续修正。
pub fn classify_api_failure(status: reqwest::StatusCode, body: &str) -> EvalError {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS || body.contains("rate_limit_error") {
        EvalError::RateLimited {
            status: status.as_u16(),
            message: body.to_string(),
        }
    } else {
        EvalError::Api {
            status: status.as_u16(),
            message: body.to_string(),
        }
    }
}
