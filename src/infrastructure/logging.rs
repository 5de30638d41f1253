use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// 日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,
    pub log_dir: String,
    pub log_file: String,
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            log_dir: "log".to_string(),
            log_file: "ai_paper_eval.log".to_string(),
            filter: None,
        }
    }
}

/// 设置日志系统
///
/// 同时输出到标准输出和日志文件（追加模式），日志目录不存在时自动创建。
pub fn setup_logging(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter = if let Some(filter) = &config.filter {
        EnvFilter::try_new(filter)?
    } else {
        EnvFilter::from_default_env()
            .add_directive(format!("ai_paper_eval={}", config.level).parse()?)
    };

    let log_dir = Path::new(&config.log_dir);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(&config.log_file))?;

    let stdout_layer = fmt::layer().with_writer(io::stdout).with_target(true);
    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert_eq!(config.log_dir, "log");
        assert_eq!(config.log_file, "ai_paper_eval.log");
        assert!(config.filter.is_none());
    }

    #[test]
    fn test_log_file_opened_in_append_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ai_paper_eval.log");
        std::fs::write(&path, "existing\n").unwrap();

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();
        drop(file);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "existing\n");
    }
}
