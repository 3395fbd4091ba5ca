use anyhow::Result;
/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::workflow::QualityReport;

/// 初始化 tracing
///
/// 优先使用 `RUST_LOG`；未设置时默认 `info`，详细模式下为 `debug`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n题目抽取日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 在日志文件中追加一份文档的统计
pub fn append_document_summary(
    log_file_path: &str,
    document: &str,
    report: &QualityReport,
) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    writeln!(file, "{} | {}", document, format_report(report))?;
    Ok(())
}

/// 一行统计文本
pub fn format_report(report: &QualityReport) -> String {
    format!(
        "题目 {} | 分界 {} | 外部ID {} | 答案 {} | 5个选项 {} | 解析 {} | 参考文献 {}{}",
        report.total,
        report.boundary_count,
        report.with_external_id,
        report.with_answer_key,
        report.with_five_alternatives,
        report.with_explanation,
        report.with_reference,
        if report.degenerate { " | ⚠️ 未找到分界" } else { "" }
    )
}

/// 记录程序启动信息
pub fn log_startup(input_path: &str, output_dir: &str, profile_name: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - PDF 题目抽取");
    info!("📂 输入: {}", input_path);
    info!("📁 输出目录: {}", output_dir);
    info!("📐 版式: {}", profile_name);
    info!("{}", "=".repeat(60));
}

/// 记录文档加载信息
pub fn log_documents_found(total: usize) {
    info!("✓ 找到 {} 个待处理的 PDF", total);
    info!("💡 按文件名顺序逐个处理\n");
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功文档数
/// - `failed`: 失败文档数
/// - `questions`: 抽取出的题目总数
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(success: usize, failed: usize, questions: usize, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, success + failed);
    info!("❌ 失败: {}", failed);
    info!("📝 题目总数: {}", questions);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
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
