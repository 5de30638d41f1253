use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    /// 相邻两次评估调用之间的固定间隔
    pub pacing_delay: Duration,
    /// 限流重试的退避基数，第 n 次重试等待 backoff_base × n
    pub backoff_base: Duration,
    /// 单篇评估的最大尝试次数（含首次调用）
    pub max_attempts: u32,
    pub debug: bool,
}

impl Config {
    pub fn new() -> Self {
        // 默认配置
        let mut config = Config {
            api_key: None,
            api_url: "https://api.anthropic.com/v1/messages".to_string(),
            model: "claude-3-5-haiku-20241022".to_string(),
            pacing_delay: Duration::from_secs(20),
            backoff_base: Duration::from_secs(15),
            max_attempts: 3,
            debug: false,
        };

        // 加载配置文件
        #[cfg(not(test))]
        config.load_from_env_file();
        // 加载环境变量（覆盖配置文件）
        config.load_from_env();

        config
    }

    pub fn load_from_env_file(&mut self) {
        // 尝试从用户主目录加载
        if let Ok(home) = env::var("HOME") {
            let user_env_path = PathBuf::from(format!("{}/.ai-paper-eval/.env", home));
            if user_env_path.exists() {
                dotenvy::from_path(user_env_path).ok();
            }
        }

        // 尝试从当前目录加载
        dotenvy::dotenv().ok();
    }

    pub fn load_from_env(&mut self) {
        if let Ok(api_key) = env::var("AI_PAPER_EVAL_API_KEY") {
            self.api_key = Some(api_key);
        } else if let Ok(api_key) = env::var("ANTHROPIC_API_KEY") {
            self.api_key = Some(api_key);
        }
        if let Ok(url) = env::var("AI_PAPER_EVAL_API_URL") {
            self.api_url = url;
        }
        if let Ok(model) = env::var("AI_PAPER_EVAL_MODEL") {
            self.model = model;
        }
        if let Ok(secs) = env::var("AI_PAPER_EVAL_PACING_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                self.pacing_delay = Duration::from_secs(secs);
            }
        }
        if let Ok(secs) = env::var("AI_PAPER_EVAL_BACKOFF_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                self.backoff_base = Duration::from_secs(secs);
            }
        }
        if let Ok(attempts) = env::var("AI_PAPER_EVAL_MAX_ATTEMPTS") {
            if let Ok(attempts) = attempts.parse::<u32>() {
                self.max_attempts = attempts;
            }
        }
    }

    pub fn update_from_args(&mut self, args: &crate::cli::args::Args) {
        // 命令行参数优先级最高
        if !args.model.is_empty() {
            self.model = args.model.clone();
        }
        if args.debug {
            self.debug = true;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        // 验证配置的有效性
        if self.api_key.is_none() {
            anyhow::bail!("Anthropic API key is required but not set. Please set AI_PAPER_EVAL_API_KEY environment variable or in .env file");
        }
        if self.max_attempts == 0 {
            anyhow::bail!("AI_PAPER_EVAL_MAX_ATTEMPTS must be at least 1");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
