//! 抽取质量统计
//!
//! 只统计，不纠正：调用方据此判断哪些文档或题目需要人工检查

use crate::models::question::QuestionRecord;
use crate::services::question_splitter::Segmentation;
use serde::Serialize;

/// 一份文档的抽取质量
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualityReport {
    pub total: usize,
    pub boundary_count: usize,
    /// 没有找到任何分界，整份文本被当成一道题
    pub degenerate: bool,
    pub with_external_id: usize,
    pub with_answer_key: usize,
    pub with_five_alternatives: usize,
    pub with_explanation: usize,
    pub with_reference: usize,
}

impl QualityReport {
    pub fn new(records: &[QuestionRecord], segmentation: &Segmentation) -> Self {
        let count = |pred: fn(&QuestionRecord) -> bool| records.iter().filter(|r| pred(r)).count();

        Self {
            total: records.len(),
            boundary_count: segmentation.boundary_count,
            degenerate: segmentation.is_degenerate(),
            with_external_id: count(|r| r.external_id.is_some()),
            with_answer_key: count(|r| r.correct_letter().is_some()),
            with_five_alternatives: count(|r| r.found_alternatives() == 5),
            with_explanation: count(|r| r.explanation_question.is_some()),
            with_reference: count(|r| r.has_reference),
        }
    }

    /// 每道题都有答案和 5 个选项
    pub fn is_complete(&self) -> bool {
        !self.degenerate
            && self.with_answer_key == self.total
            && self.with_five_alternatives == self.total
    }
}

/// 单道题的缺失项
///
/// # 返回
/// (题目序号（从1开始）, 原因) 列表
pub fn question_issues(records: &[QuestionRecord]) -> Vec<(usize, String)> {
    records
        .iter()
        .enumerate()
        .filter_map(|(i, record)| {
            let mut missing = Vec::new();
            if record.external_id.is_none() {
                missing.push("缺少外部ID".to_string());
            }
            if record.correct_letter().is_none() {
                missing.push("缺少答案".to_string());
            }
            let found = record.found_alternatives();
            if found < 5 {
                missing.push(format!("只找到 {} 个选项", found));
            }

            if missing.is_empty() {
                None
            } else {
                Some((i + 1, missing.join(", ")))
            }
        })
        .collect()
}
