//! 抽取流程 - 流程层
//!
//! 核心职责：定义"一份文档"的完整抽取流程
//!
//! 流程顺序：
//! 1. 逐页清洗（去页眉页脚）
//! 2. 拼接后按题目分界切分
//! 3. 逐块抽取字段，保持文档顺序
//!
//! 整个流程是纯函数：不读写文件，不持有可变状态

use crate::models::profile::CompiledProfile;
use crate::models::question::{ExamMetadata, QuestionRecord};
use crate::services::{FieldExtractor, IdGenerator, PageCleaner, QuestionSplitter};
use crate::workflow::quality::QualityReport;
use tracing::{debug, warn};

/// 一份文档的抽取结果
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub records: Vec<QuestionRecord>,
    pub quality: QualityReport,
}

/// 抽取流程
///
/// - 编排 清洗 → 切分 → 抽取
/// - 只依赖业务能力（services）
/// - 版式和试卷常量在创建时给定，对所有题目统一适用
pub struct ExtractionFlow<'p> {
    cleaner: PageCleaner<'p>,
    splitter: QuestionSplitter<'p>,
    extractor: FieldExtractor<'p>,
    metadata: ExamMetadata,
}

impl<'p> ExtractionFlow<'p> {
    /// 创建新的抽取流程
    pub fn new(profile: &'p CompiledProfile, metadata: ExamMetadata) -> Self {
        Self {
            cleaner: PageCleaner::new(profile),
            splitter: QuestionSplitter::new(profile),
            extractor: FieldExtractor::new(profile),
            metadata,
        }
    }

    /// 清洗并拼接所有页面
    pub fn clean_document<S: AsRef<str>>(&self, pages: &[S]) -> String {
        self.cleaner.clean_pages(pages).join("\n")
    }

    /// 运行完整流程
    ///
    /// # 参数
    /// - `pages`: 按页序排列的原始文本
    /// - `ids`: 记录 ID 生成器
    pub fn run<S: AsRef<str>>(&self, pages: &[S], ids: &mut dyn IdGenerator) -> ExtractionOutcome {
        let full_text = self.clean_document(pages);
        debug!("清洗后文本 {} 字符", full_text.chars().count());

        let segmentation = self.splitter.split(&full_text);
        if segmentation.is_degenerate() {
            warn!("⚠️ 未找到任何题目分界，整份文本按一道题处理，请检查版式是否匹配");
        }

        let records: Vec<QuestionRecord> = segmentation
            .blocks
            .iter()
            .map(|block| self.extractor.extract(block, &self.metadata, ids))
            .collect();

        let quality = QualityReport::new(&records, &segmentation);

        ExtractionOutcome { records, quality }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::letter::Letter;
    use crate::models::profile::LayoutProfile;
    use crate::services::SequentialIdGenerator;

    #[test]
    fn test_question_split_across_pages() {
        let profile = LayoutProfile::ses_pe().compile().unwrap();
        let flow = ExtractionFlow::new(&profile, ExamMetadata::default());
        let pages = [
            "1. SES-PE\nQuestão\n| | 2023 | 1000000001\nEnunciado um\nA) a\nB) b\n1/2",
            "C) c\nD) d\nE) e\nGabarito: ALTERNATIVA E\n2/2",
        ];

        let outcome = flow.run(&pages, &mut SequentialIdGenerator::default());

        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.external_id, Some(1000000001));
        assert_eq!(record.alternatives[2].alternative_text.as_deref(), Some("c"));
        assert_eq!(record.correct_letter(), Some(Letter::E));
        assert!(outcome.quality.is_complete());
    }

    #[test]
    fn test_ids_follow_document_order() {
        let profile = LayoutProfile::ses_pe().compile().unwrap();
        let flow = ExtractionFlow::new(&profile, ExamMetadata::default());
        let pages = ["Questão\n| | 2023 | 1000000001\nUm\nQuestão\n| | 2023 | 1000000002\nDois"];

        let outcome = flow.run(&pages, &mut SequentialIdGenerator::starting_at(5));
        let ids: Vec<_> = outcome.records.iter().map(|r| (r.id, r.external_id)).collect();

        assert_eq!(ids, vec![(5, Some(1000000001)), (6, Some(1000000002))]);
    }
}
