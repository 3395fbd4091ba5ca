//! 记录写入服务
//!
//! 只负责"把一份文档的全部记录写成 JSON"能力

use crate::error::{AppError, AppResult};
use crate::models::question::QuestionRecord;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// 记录写入服务
///
/// 输出是 UTF-8 的 JSON 数组，4 空格缩进，整份一次写入
pub struct RecordWriter {
    output_dir: PathBuf,
}

impl RecordWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// PDF 对应的输出路径（`prova.pdf` → `<output_dir>/prova.json`）
    pub fn output_path_for(&self, pdf_path: &Path) -> PathBuf {
        let stem = pdf_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "questoes".to_string());
        self.output_dir.join(format!("{}.json", stem))
    }

    /// 写入一份文档的全部记录
    ///
    /// # 返回
    /// 返回写入的文件路径
    pub async fn write(&self, pdf_path: &Path, records: &[QuestionRecord]) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| AppError::file_write_failed(self.output_dir.display().to_string(), e))?;

        let output_path = self.output_path_for(pdf_path);
        let json = to_pretty_json(records)?;

        debug!("写入 {} 条记录 ({} 字节)", records.len(), json.len());

        fs::write(&output_path, json)
            .await
            .map_err(|e| AppError::file_write_failed(output_path.display().to_string(), e))?;

        Ok(output_path)
    }
}

/// 4 空格缩进的 JSON
pub fn to_pretty_json(records: &[QuestionRecord]) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_uses_pdf_stem() {
        let writer = RecordWriter::new("saida");
        assert_eq!(
            writer.output_path_for(Path::new("provas/ses-pe-2023.pdf")),
            PathBuf::from("saida/ses-pe-2023.json")
        );
    }

    #[test]
    fn test_empty_batch_is_empty_array() {
        let json = to_pretty_json(&[]).unwrap();
        assert_eq!(String::from_utf8(json).unwrap(), "[]");
    }
}
