//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档处理器
//! - 管理应用生命周期（初始化、运行）
//! - 扫描待处理的 PDF（`Vec<PathBuf>`）
//! - 持有编译后的版式和 ID 生成器
//! - 输出全局统计信息
//!
//! ### `document_processor` - 单个文档处理器
//! - 读取一份 PDF 的所有页面
//! - 创建 ExtractionFlow 并运行
//! - 写出 JSON 和审查信息
//! - 输出单个文档的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<PDF>)
//!     ↓
//! document_processor (处理 Vec<Page>)
//!     ↓
//! workflow::ExtractionFlow (清洗 → 切分 → 抽取)
//!     ↓
//! services (能力层：clean / split / extract / read / write)
//! ```

pub mod batch_processor;
pub mod document_processor;

// 重新导出主要类型
pub use batch_processor::{App, BatchStats};
pub use document_processor::process_document;
