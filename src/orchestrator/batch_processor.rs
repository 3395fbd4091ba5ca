//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量 PDF 的处理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：检查配置、初始化日志文件、加载并编译版式
//! 2. **批量加载**：扫描所有待处理的 PDF（单个文件或目录）
//! 3. **顺序处理**：按文件名顺序逐个处理，输出顺序固定
//! 4. **失败隔离**：单个文档失败只记录，不中断整批
//! 5. **全局统计**：汇总所有文档的处理结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个文档的细节
//! - **版式所有者**：版式只编译一次，所有文档共用
//! - **向下委托**：委托 document_processor 处理单个文档

use crate::config::Config;
use crate::models::loaders::{collect_pdf_files, load_profile};
use crate::models::profile::{CompiledProfile, LayoutProfile};
use crate::orchestrator::document_processor;
use crate::services::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
use crate::utils::logging::{init_log_file, log_documents_found, log_startup, print_final_stats};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    profile: CompiledProfile,
}

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub success: usize,
    pub failed: usize,
    pub questions: usize,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        let layout = match config.profile_path.as_deref() {
            Some(path) => load_profile(Path::new(path)).await?,
            None => LayoutProfile::ses_pe(),
        };
        let profile = layout
            .compile()
            .with_context(|| format!("无法编译版式: {}", layout.name))?;

        log_startup(&config.input_path, &config.output_dir, &profile.name);

        Ok(Self { config, profile })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<BatchStats> {
        info!("\n📁 正在扫描待处理的 PDF...");
        let pdf_files = collect_pdf_files(Path::new(&self.config.input_path)).await?;

        if pdf_files.is_empty() {
            warn!("⚠️ 没有找到待处理的PDF文件，程序结束");
            return Ok(BatchStats::default());
        }

        log_documents_found(pdf_files.len());

        let mut ids: Box<dyn IdGenerator + Send> = if self.config.deterministic_ids {
            Box::new(SequentialIdGenerator::default())
        } else {
            Box::new(RandomIdGenerator)
        };

        let mut stats = BatchStats::default();

        for (idx, pdf_path) in pdf_files.iter().enumerate() {
            let document_index = idx + 1;
            match document_processor::process_document(
                pdf_path,
                document_index,
                &self.profile,
                &self.config,
                ids.as_mut(),
            )
            .await
            {
                Ok(report) => {
                    stats.success += 1;
                    stats.questions += report.total;
                }
                Err(e) => {
                    error!("[文档 {}] ❌ 处理过程中发生错误: {:#}", document_index, e);
                    stats.failed += 1;
                }
            }
        }

        print_final_stats(
            stats.success,
            stats.failed,
            stats.questions,
            &self.config.output_log_file,
        );

        Ok(stats)
    }
}
