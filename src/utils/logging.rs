//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use anyhow::Result;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::round::Round;

/// 初始化 tracing 订阅者
///
/// 默认级别为 info，可用 `RUST_LOG` 覆盖；重复调用时忽略
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n出题日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(source: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - ME2種 出题工具");
    info!("📂 题目来源: {}", source);
    info!("{}", "=".repeat(60));
}

/// 记录问题 PDF 的解析结果
///
/// # 参数
/// - `page_count`: 页数
/// - `round`: 检测到的回数
/// - `question_count`: 抽出的题目数
pub fn log_questions_parsed(page_count: usize, round: Round, question_count: usize) {
    info!("✓ 问题PDF读取完成: {} 页 / 检测回: {}", page_count, round);
    info!("📋 抽出的题目数: {}（精度取决于 PDF 体裁）", question_count);
}

/// 记录正答表的抽出结果
///
/// # 参数
/// - `answer_count`: 抽出的正答数
/// - `source`: 正答来源
pub fn log_answers_parsed(answer_count: usize, source: &str) {
    if answer_count > 0 {
        info!("✓ 取得正答: {} 题 / 来源: {}", answer_count, source);
    } else {
        tracing::warn!("⚠️ 未能抽出正答（无法判定），建议提供正答 PDF");
    }
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
