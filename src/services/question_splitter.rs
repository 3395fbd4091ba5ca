//! 题目切分服务 - 业务能力层
//!
//! 只负责"把整份文本切成一道道题"能力

use crate::models::profile::CompiledProfile;
use tracing::debug;

/// 切分结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// 按文档顺序排列的题目块
    pub blocks: Vec<String>,
    /// 找到的分界数量
    pub boundary_count: usize,
}

impl Segmentation {
    /// 一个分界都没找到，但仍然有文本
    ///
    /// 这种情况下整份文本被当作一道题返回，通常意味着版式不匹配
    pub fn is_degenerate(&self) -> bool {
        self.boundary_count == 0 && !self.blocks.is_empty()
    }
}

/// 题目切分服务
pub struct QuestionSplitter<'p> {
    profile: &'p CompiledProfile,
}

impl<'p> QuestionSplitter<'p> {
    pub fn new(profile: &'p CompiledProfile) -> Self {
        Self { profile }
    }

    /// 在每个分界处切开文本
    ///
    /// 每个题目块都从一个分界开始，直到下一个分界或文本结束。
    /// 第一个分界之前的前言会被丢弃；没有分界时整份文本作为唯一的块。
    pub fn split(&self, full_text: &str) -> Segmentation {
        let starts: Vec<usize> = self
            .profile
            .boundary
            .find_iter(full_text)
            .map(|m| m.start())
            .collect();

        if starts.is_empty() {
            let trimmed = full_text.trim();
            let blocks = if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![trimmed.to_string()]
            };
            return Segmentation {
                blocks,
                boundary_count: 0,
            };
        }

        let preamble = full_text[..starts[0]].trim();
        if !preamble.is_empty() {
            debug!("丢弃第一题之前的前言 ({} 字符)", preamble.chars().count());
        }

        let ends = starts.iter().skip(1).copied().chain(std::iter::once(full_text.len()));
        let blocks = starts
            .iter()
            .zip(ends)
            .map(|(&start, end)| full_text[start..end].trim())
            .filter(|block| !block.is_empty())
            .map(str::to_string)
            .collect();

        Segmentation {
            blocks,
            boundary_count: starts.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::LayoutProfile;

    fn profile() -> CompiledProfile {
        LayoutProfile::ses_pe().compile().unwrap()
    }

    const TWO_QUESTIONS: &str = "Capa da apostila\n\nQuestão\n| | 2023 | 1111111111\nPrimeira?\nA) sim\nQuestão\n| | 2022 | 2222222222\nSegunda?\nA) não";

    #[test]
    fn test_split_in_document_order() {
        let profile = profile();
        let segmentation = QuestionSplitter::new(&profile).split(TWO_QUESTIONS);

        assert_eq!(segmentation.boundary_count, 2);
        assert_eq!(segmentation.blocks.len(), 2);
        assert!(segmentation.blocks[0].starts_with("Questão\n| | 2023 | 1111111111"));
        assert!(segmentation.blocks[0].ends_with("A) sim"));
        assert!(segmentation.blocks[1].contains("2222222222"));
        assert!(!segmentation.is_degenerate());
    }

    #[test]
    fn test_blocks_are_ordered_substrings() {
        let profile = profile();
        let segmentation = QuestionSplitter::new(&profile).split(TWO_QUESTIONS);

        let mut cursor = 0;
        for block in &segmentation.blocks {
            let found = TWO_QUESTIONS[cursor..].find(block.as_str()).expect("块应当出现在原文中");
            cursor += found + block.len();
        }
    }

    #[test]
    fn test_accepts_unaccented_keyword() {
        let profile = profile();
        let text = "Questao\n| | 2021 | 3333333333\nTexto";
        let segmentation = QuestionSplitter::new(&profile).split(text);
        assert_eq!(segmentation.boundary_count, 1);
        assert_eq!(segmentation.blocks, vec![text.to_string()]);
    }

    #[test]
    fn test_no_boundary_returns_whole_text() {
        let profile = profile();
        let segmentation = QuestionSplitter::new(&profile).split("  \nTexto solto sem marcador\n ");

        assert_eq!(segmentation.blocks, vec!["Texto solto sem marcador".to_string()]);
        assert!(segmentation.is_degenerate());
    }

    #[test]
    fn test_empty_text_has_no_blocks() {
        let profile = profile();
        let segmentation = QuestionSplitter::new(&profile).split("   ");
        assert!(segmentation.blocks.is_empty());
        assert!(!segmentation.is_degenerate());
    }
}
