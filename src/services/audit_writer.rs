//! 审查写入服务 - 业务能力层
//!
//! 只负责"写 audit.txt"能力，不关心流程

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 审查写入服务
///
/// 职责：
/// - 记录需要人工检查的文档和题目
/// - 只追加，不覆盖
/// - 不修改任何抽取结果
pub struct AuditWriter {
    audit_file_path: String,
}

impl AuditWriter {
    /// 使用指定文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            audit_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.audit_file_path
    }

    /// 写入一条审查信息
    ///
    /// # 参数
    /// - `document`: 文档名
    /// - `question_index`: 题目序号（文档级问题为 `None`）
    /// - `reason`: 原因
    pub async fn write(
        &self,
        document: &str,
        question_index: Option<usize>,
        reason: &str,
    ) -> Result<()> {
        debug!(
            "写入审查: 文档 {} | 题目 {:?} | 原因: {}",
            document, question_index, reason
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.audit_file_path)?;

        let audit_msg = match question_index {
            Some(index) => format!("文档 {} | 题目 {} | {}\n", document, index, reason),
            None => format!("文档 {} | {}\n", document, reason),
        };

        file.write_all(audit_msg.as_bytes())?;

        Ok(())
    }
}
