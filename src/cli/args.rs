use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "ai-paper-eval",
    version,
    about = "论文评估工具 - 使用 AI 将用户论文与参考论文逐篇对比并生成综合评估",
    long_about = "ai-paper-eval 将用户论文与一组参考论文按顺序逐篇对比评估，\
再将各篇评估结果综合为一份最终评估报告。评估由远程文本生成服务完成，\
调用之间插入固定间隔以避免触发服务限流。"
)]
pub struct Args {
    /// 用户论文文件路径
    #[arg(value_name = "PAPER")]
    pub paper: String,

    /// 参考论文文件路径（可指定多次，按顺序评估）
    #[arg(short = 'r', long = "reference", value_name = "FILE", required = true)]
    pub references: Vec<String>,

    /// Model to use (default: claude-3-5-haiku-20241022)
    #[arg(short, long, default_value = "")] // 空字符串表示未指定
    pub model: String,

    /// 最终评估输出文件（不指定则输出到标准输出）
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// 日志目录
    #[arg(long = "log-dir", value_name = "DIR", default_value = "log")]
    pub log_dir: String,

    /// 显示调试信息
    #[arg(short = 'd', long, default_value_t = false)]
    pub debug: bool,
}
