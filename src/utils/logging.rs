//! 日志工具模块
//!
//! 提供日志初始化和会话统计输出的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::question::QuestionBank;

/// 初始化日志
///
/// 答题界面走 stdout，日志走 stderr，互不干扰。
/// 默认级别 info，可用 RUST_LOG 覆盖。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 问答会话启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📚 题库文件: {}", config.data_file);
    if config.score_endpoint_url.is_empty() {
        info!("📡 成绩上报: 未配置 (禁用)");
    } else {
        info!("📡 成绩上报: {}", config.score_endpoint_url);
    }
    info!("{}", "=".repeat(60));
}

/// 记录题库加载信息
pub fn log_bank_loaded(bank: &QuestionBank) {
    info!("✓ 成功加载 {} 道题目", bank.total_questions());
}

/// 打印最终得分统计
///
/// # 参数
/// - `score`: 得分
/// - `total`: 题目总数
pub fn log_final_score(score: usize, total: usize) {
    info!("{}", "=".repeat(60));
    info!("📊 最终得分: {} / {}", score, total);
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}
