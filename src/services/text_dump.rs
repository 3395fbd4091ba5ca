//! 原始文本导出服务
//!
//! 用于排查版式问题：把 PDF 的逐页原文写成一个 .txt

use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 原始文本导出服务
pub struct RawTextWriter {
    output_dir: PathBuf,
}

impl RawTextWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 写入逐页原文，每页前加 `--- Página N ---`
    pub async fn write(&self, pdf_path: &Path, pages: &[String]) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| AppError::file_write_failed(self.output_dir.display().to_string(), e))?;

        let stem = pdf_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "texto".to_string());
        let output_path = self.output_dir.join(format!("{}.txt", stem));

        fs::write(&output_path, render_pages(pages))
            .await
            .map_err(|e| AppError::file_write_failed(output_path.display().to_string(), e))?;

        Ok(output_path)
    }
}

/// 把逐页文本拼成带页码分隔的文本
pub fn render_pages(pages: &[String]) -> String {
    pages
        .iter()
        .enumerate()
        .map(|(i, page)| format!("\n--- Página {} ---\n{}\n", i + 1, page.trim()))
        .collect()
}
