use ai_paper_eval::ai::client::AnthropicClient;
use ai_paper_eval::cli::args::Args;
use ai_paper_eval::config::Config;
use ai_paper_eval::eval::{EvalPolicy, FeedbackOrchestrator};
use ai_paper_eval::infrastructure::logging::{setup_logging, LoggingConfig};
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = Config::new();

    config.update_from_args(&args);

    // 日志先于配置验证初始化，启动阶段的失败也要进日志
    setup_logging(LoggingConfig {
        log_dir: args.log_dir.clone(),
        ..LoggingConfig::default()
    })?;

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "配置验证失败");
        return Err(e);
    }

    let user_text = std::fs::read_to_string(&args.paper)
        .with_context(|| format!("无法读取论文文件: {}", args.paper))?;

    let mut references = Vec::with_capacity(args.references.len());
    for path in &args.references {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取参考论文文件: {}", path))?;
        references.push(text);
    }

    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("API key 未配置"))?;
    let generator = Arc::new(AnthropicClient::new(config.api_url.clone(), api_key));
    let orchestrator = FeedbackOrchestrator::new(generator, EvalPolicy::from(&config));

    let start_time = Instant::now();
    let final_evaluation = orchestrator
        .generate_paper_feedback(&user_text, &references)
        .await?;
    let elapsed_time = start_time.elapsed();

    if config.debug {
        println!("论文评估耗时: {:.2?}", elapsed_time);
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, &final_evaluation)
                .with_context(|| format!("无法写入输出文件: {}", path))?;
            println!("✅ 最终评估已保存到: {}", path);
        }
        None => println!("{}", final_evaluation),
    }

    Ok(())
}
