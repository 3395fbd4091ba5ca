//! PDF 读取服务
//!
//! 只负责"把 PDF 变成逐页文本"能力

use crate::error::{AppError, AppResult, PdfError};
use lopdf::Document;
use std::path::Path;
use tracing::{debug, warn};

/// PDF 读取服务
pub struct PdfReader;

impl PdfReader {
    /// 逐页提取文本
    ///
    /// # 返回
    /// 每页一个字符串，顺序与页码一致。某一页提取失败时该页为空字符串
    pub fn read_pages(path: &Path) -> AppResult<Vec<String>> {
        let document = Document::load(path)
            .map_err(|e| AppError::pdf_load_failed(path.display().to_string(), e))?;

        Ok(Self::pages_of(&document, path))
    }

    fn pages_of(document: &Document, path: &Path) -> Vec<String> {
        // get_pages 返回 BTreeMap，按页码升序
        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        debug!("{} 共 {} 页", path.display(), page_numbers.len());

        page_numbers
            .into_iter()
            .map(|page_number| match document.extract_text(&[page_number]) {
                Ok(text) => text,
                Err(e) => {
                    warn!("⚠️ 第 {} 页文本提取失败，按空页处理: {}", page_number, e);
                    String::new()
                }
            })
            .collect()
    }

    /// 确认 PDF 至少有一页
    pub fn ensure_not_empty(pages: &[String], path: &Path) -> AppResult<()> {
        if pages.is_empty() {
            return Err(PdfError::NoPages {
                path: path.display().to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bytes_are_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("falso.pdf");
        std::fs::write(&path, b"isto nao e um pdf").unwrap();

        let result = PdfReader::read_pages(&path);
        assert!(matches!(
            result,
            Err(AppError::Pdf(PdfError::LoadFailed { .. }))
        ));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let result = PdfReader::read_pages(Path::new("/nao/existe/prova.pdf"));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_page_list_rejected() {
        let err = PdfReader::ensure_not_empty(&[], Path::new("vazio.pdf")).unwrap_err();
        assert!(err.to_string().contains("vazio.pdf"));
    }
}
