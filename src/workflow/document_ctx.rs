//! 文档处理上下文
//!
//! 封装"我正在处理第几份文档、叫什么、有几页"这一信息

use std::fmt::Display;
use std::path::Path;

/// 文档处理上下文
#[derive(Debug, Clone)]
pub struct DocumentCtx {
    /// 文档文件名
    pub document_name: String,

    /// 文档在本批中的索引（从1开始，仅用于日志显示）
    pub document_index: usize,

    /// 页数
    pub page_count: usize,
}

impl DocumentCtx {
    /// 创建新的文档上下文
    pub fn new(pdf_path: &Path, document_index: usize, page_count: usize) -> Self {
        let document_name = pdf_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| pdf_path.display().to_string());

        Self {
            document_name,
            document_index,
            page_count,
        }
    }
}

impl Display for DocumentCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文档 #{} {} 共{}页]",
            self.document_index, self.document_name, self.page_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_file_name() {
        let ctx = DocumentCtx::new(Path::new("provas/ses-pe.pdf"), 2, 382);
        assert_eq!(ctx.to_string(), "[文档 #2 ses-pe.pdf 共382页]");
    }
}
