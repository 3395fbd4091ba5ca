//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责处理一份 PDF，是文档级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **读取页面**：在阻塞线程池中用 lopdf 逐页提取文本
//! 2. **原文导出**：按配置导出逐页原文，便于排查版式
//! 3. **流程调度**：委托 `ExtractionFlow` 完成 清洗 → 切分 → 抽取
//! 4. **结果写入**：整份写出 JSON
//! 5. **审查记录**：把未找到分界的文档和缺字段的题目写入审查文件
//! 6. **统计输出**：记录本文档的抽取质量

use crate::config::Config;
use crate::models::loaders::load_metadata_sidecar;
use crate::models::profile::CompiledProfile;
use crate::services::{AuditWriter, IdGenerator, PdfReader, RawTextWriter, RecordWriter};
use crate::utils::logging::{append_document_summary, format_report, truncate_text};
use crate::workflow::{question_issues, DocumentCtx, ExtractionFlow, QualityReport};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// 处理单个 PDF
///
/// # 参数
/// - `pdf_path`: PDF 路径
/// - `document_index`: 文档索引（用于日志）
/// - `profile`: 编译后的版式
/// - `config`: 配置
/// - `ids`: 记录 ID 生成器（整批共用）
///
/// # 返回
/// 返回本文档的抽取质量
pub async fn process_document(
    pdf_path: &Path,
    document_index: usize,
    profile: &CompiledProfile,
    config: &Config,
    ids: &mut (dyn IdGenerator + Send),
) -> Result<QualityReport> {
    info!("\n[文档 {}] {}", document_index, "─".repeat(30));
    info!("[文档 {}] 📄 正在读取: {}", document_index, pdf_path.display());

    let pages = read_pages(pdf_path).await?;
    PdfReader::ensure_not_empty(&pages, pdf_path)?;

    let ctx = DocumentCtx::new(pdf_path, document_index, pages.len());
    info!("{} ✓ 读取完成", ctx);

    if config.dump_raw_text {
        let dump_path = RawTextWriter::new(&config.output_dir)
            .write(pdf_path, &pages)
            .await
            .with_context(|| format!("{} 无法导出原文", ctx))?;
        info!("{} 📝 原文已导出: {}", ctx, dump_path.display());
    }

    let metadata = match load_metadata_sidecar(pdf_path).await? {
        Some(metadata) => metadata,
        None => config.exam.clone(),
    };
    debug!("{} 试卷信息: {:?}", ctx, metadata);

    let flow = ExtractionFlow::new(profile, metadata);
    let outcome = flow.run(&pages, ids);

    log_records(&ctx, &outcome.records, config.verbose_logging);
    info!("{} 📊 {}", ctx, format_report(&outcome.quality));
    if outcome.quality.is_complete() {
        info!("{} ✓ 每道题都有答案和 5 个选项", ctx);
    }

    let output_path = RecordWriter::new(&config.output_dir)
        .write(pdf_path, &outcome.records)
        .await
        .with_context(|| format!("{} 无法写入JSON", ctx))?;
    info!(
        "{} ✓ {} 道题已保存至 {}",
        ctx,
        outcome.records.len(),
        output_path.display()
    );

    write_audit(&ctx, &outcome.records, &outcome.quality, config).await;

    if let Err(e) = append_document_summary(&config.output_log_file, &ctx.document_name, &outcome.quality) {
        warn!("{} ⚠️ 写入日志文件失败: {}", ctx, e);
    }

    Ok(outcome.quality)
}

/// lopdf 是同步的，放到阻塞线程池中执行
async fn read_pages(pdf_path: &Path) -> Result<Vec<String>> {
    let path = pdf_path.to_path_buf();
    let pages = tokio::task::spawn_blocking(move || PdfReader::read_pages(&path))
        .await
        .context("PDF读取任务异常退出")??;
    Ok(pages)
}

/// 写入审查文件；失败只记日志，不影响已经写出的结果
async fn write_audit(
    ctx: &DocumentCtx,
    records: &[crate::models::QuestionRecord],
    report: &QualityReport,
    config: &Config,
) {
    let audit_writer = AuditWriter::with_path(config.audit_file.clone());

    if report.degenerate {
        warn!("{} ⚠️ 未找到题目分界，写入 {}", ctx, audit_writer.path());
        if let Err(e) = audit_writer
            .write(&ctx.document_name, None, "未找到题目分界，整份文本被当作一道题")
            .await
        {
            warn!("{} 写入审查文件失败: {}", ctx, e);
        }
        return;
    }

    let issues = question_issues(records);
    if issues.is_empty() {
        return;
    }

    warn!(
        "{} ⚠️ {} 道题缺少字段，写入 {}",
        ctx,
        issues.len(),
        audit_writer.path()
    );
    for (question_index, reason) in issues {
        if let Err(e) = audit_writer
            .write(&ctx.document_name, Some(question_index), &reason)
            .await
        {
            warn!("{} 写入审查文件失败: {}", ctx, e);
            break;
        }
    }
}

fn log_records(ctx: &DocumentCtx, records: &[crate::models::QuestionRecord], verbose: bool) {
    if !verbose {
        return;
    }
    for (i, record) in records.iter().enumerate() {
        debug!(
            "{} 题目 {} | 外部ID {:?} | 答案 {:?} | {}",
            ctx,
            i + 1,
            record.external_id,
            record.correct_letter(),
            truncate_text(&record.question_text, 80)
        );
    }
}
