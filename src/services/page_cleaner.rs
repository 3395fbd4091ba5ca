//! 页面清洗服务 - 业务能力层
//!
//! 只负责"去掉页眉页脚"能力，不关心页面从哪里来

use crate::models::profile::CompiledProfile;
use regex::Regex;
use std::sync::LazyLock;

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("静态正则"));
static HORIZONTAL_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("静态正则"));

/// 页面清洗服务
///
/// 职责：
/// - 按版式删除页码、页眉等噪声
/// - 合并多余的空行和空白
/// - 纯函数，不会失败，重复执行结果不变
pub struct PageCleaner<'p> {
    profile: &'p CompiledProfile,
}

impl<'p> PageCleaner<'p> {
    pub fn new(profile: &'p CompiledProfile) -> Self {
        Self { profile }
    }

    /// 清洗单页文本
    pub fn clean(&self, page_text: &str) -> String {
        let mut text = page_text.to_string();

        for (_name, pattern) in &self.profile.noise {
            text = pattern.replace_all(&text, "").into_owned();
        }

        collapse_whitespace(&text)
    }

    /// 清洗所有页面，保持页序
    pub fn clean_pages<S: AsRef<str>>(&self, pages: &[S]) -> Vec<String> {
        pages.iter().map(|page| self.clean(page.as_ref())).collect()
    }
}

/// 合并空行（任意多行空白 → 一个空行）与连续空格，并去掉首尾空白
pub fn collapse_whitespace(text: &str) -> String {
    let text = BLANK_LINES.replace_all(text, "\n\n");
    let text = HORIZONTAL_SPACES.replace_all(&text, " ");
    text.trim().to_string()
}
