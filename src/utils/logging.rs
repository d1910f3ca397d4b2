/// 日志工具模块
///
/// 提供日志初始化和启动信息输出的辅助函数
use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先，否则按 `verbose` 取 `debug` 或 `info`。重复调用不会报错
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 题库服务启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("📁 种子文件: {}", config.seed_file);
    if config.legacy_missing_field_status {
        info!("⚙️ 缺少字段时返回 405（兼容模式）");
    }
    info!("{}", "=".repeat(60));
}

/// 记录题库加载信息
pub fn log_bank_loaded(categories: usize, questions: usize) {
    info!("✓ 题库就绪: {} 个分类, {} 道题目", categories, questions);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
