//! # Extract Question PDF
//!
//! 从 PDF 题集（SES-PE 等巴西公务员考试）中抽取选择题，输出结构化 JSON
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目记录、试卷常量、版式配置
//! - `LayoutProfile` - 一个文档家族的全部版式正则，可从 TOML 加载
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务只做一件事
//! - `PageCleaner` - 去页眉页脚
//! - `QuestionSplitter` - 按题目分界切分
//! - `FieldExtractor` - 抽取题干、选项、答案、解析、参考文献
//! - `PdfReader` / `RecordWriter` / `AuditWriter` - 外部输入输出
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份文档"的完整抽取流程
//! - `ExtractionFlow` - 流程编排（清洗 → 切分 → 抽取），纯函数
//! - `QualityReport` - 抽取质量统计
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量处理器，扫描 PDF、汇总统计
//! - `orchestrator/document_processor` - 单个文档处理器，读 PDF、写 JSON
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Alternative, CompiledProfile, ExamMetadata, LayoutProfile, Letter, QuestionRecord};
pub use orchestrator::{process_document, App};
pub use services::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use workflow::{ExtractionFlow, ExtractionOutcome, QualityReport};
