use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

/// 进程级共享 HTTP 客户端
///
/// 评估流程对单一主机顺序调用，连接池保留一个空闲连接即可；
/// 生成调用耗时较长，整体超时放宽到 120 秒。
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(concat!("ai-paper-eval/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(1)
        .pool_idle_timeout(Duration::from_secs(90))
        .timeout(Duration::from_secs(120))
        .build()
        .expect("Failed to create HTTP client")
});

/// 获取共享的 HTTP 客户端引用
pub fn shared_client() -> &'static Client {
    &HTTP_CLIENT
}
