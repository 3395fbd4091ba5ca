//! 字段抽取服务 - 业务能力层
//!
//! 把一个题目块解析成一条 [`QuestionRecord`]。
//!
//! 抽取从不失败：任何一个模式没有命中，对应字段就是 `None`/默认值，
//! 其余字段照常抽取。结果是否可用由调用方审查。

use crate::models::letter::Letter;
use crate::models::profile::CompiledProfile;
use crate::models::question::{ExamMetadata, ExtractedFields, QuestionRecord};
use crate::services::id_generator::IdGenerator;
use tracing::debug;

/// 字段抽取服务
///
/// 职责：
/// - 只处理单个题目块
/// - 不做任何 I/O
/// - ID 由调用方注入的生成器提供
pub struct FieldExtractor<'p> {
    profile: &'p CompiledProfile,
}

impl<'p> FieldExtractor<'p> {
    pub fn new(profile: &'p CompiledProfile) -> Self {
        Self { profile }
    }

    /// 抽取并组装一条记录
    ///
    /// # 参数
    /// - `block`: 题目块文本
    /// - `metadata`: 试卷常量（标题、来源、科目、地区、年份）
    /// - `ids`: 记录 ID 生成器
    pub fn extract(
        &self,
        block: &str,
        metadata: &ExamMetadata,
        ids: &mut dyn IdGenerator,
    ) -> QuestionRecord {
        let fields = self.extract_fields(block);
        QuestionRecord::assemble(ids.next_id(), fields, metadata)
    }

    /// 只抽取题目块中的字段
    pub fn extract_fields(&self, block: &str) -> ExtractedFields {
        let external_id = self.external_id(block);
        let answer_key = self.answer_key(block);

        let (body_region, explanation_region) = self.split_explanation(block);

        // 没有解析区时，参考文献可能直接跟在题目后面
        let reference = self.reference(explanation_region.as_deref().unwrap_or(block));

        let body = self.profile.header_line.replace_all(body_region, "");
        let (question_text, alternative_texts) = self.split_alternatives(&body);

        let (explanation_question, alternative_explanations) = match explanation_region.as_deref() {
            Some(region) => (
                self.general_explanation(region),
                self.alternative_explanations(region),
            ),
            None => (None, Default::default()),
        };

        ExtractedFields {
            external_id,
            answer_key,
            question_text,
            alternative_texts,
            alternative_explanations,
            explanation_question,
            reference,
        }
    }

    fn external_id(&self, block: &str) -> Option<u64> {
        self.profile
            .external_id
            .captures(block)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u64>().ok())
    }

    fn answer_key(&self, block: &str) -> Option<Letter> {
        self.profile
            .answer_key
            .captures(block)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().chars().next())
            .and_then(Letter::from_char)
    }

    /// 在第一个解析标记处切开
    ///
    /// # 返回
    /// (题干+选项区, 解析区)。解析区去掉了所有标记行；没有标记时为 `None`
    fn split_explanation<'b>(&self, block: &'b str) -> (&'b str, Option<String>) {
        let marker = &self.profile.explanation_marker;
        let Some(first) = marker.find(block) else {
            return (block, None);
        };

        let region = marker
            .split(&block[first.start()..])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        (&block[..first.start()], Some(region))
    }

    fn reference(&self, text: &str) -> Option<String> {
        self.profile
            .reference
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|reference| !reference.is_empty())
            .map(str::to_string)
    }

    /// 题干和最多 5 个选项
    ///
    /// 选项按出现顺序依次对应 A–E；不足 5 个的位置为 `None`，多出的直接丢弃
    fn split_alternatives(&self, body: &str) -> (String, [Option<String>; 5]) {
        let mut parts = self.profile.alternative_marker.split(body);
        let question_text = parts.next().unwrap_or_default().trim().to_string();

        let fragments: Vec<&str> = parts.collect();
        if fragments.len() > Letter::ALL.len() {
            debug!(
                "找到 {} 个选项片段，只保留前 {} 个",
                fragments.len(),
                Letter::ALL.len()
            );
        }

        let mut texts: [Option<String>; 5] = Default::default();
        for (slot, fragment) in texts.iter_mut().zip(fragments) {
            *slot = Some(fragment.trim().to_string());
        }

        (question_text, texts)
    }

    /// 解析区中第一个逐项解析之前的部分
    ///
    /// 参考文献不会被删掉：没有逐项解析时，"Referência: ..." 行也留在总解析里
    fn general_explanation(&self, region: &str) -> Option<String> {
        let end = self
            .profile
            .alternative_explanation_stop
            .find(region)
            .map(|m| m.start())
            .unwrap_or(region.len());

        non_empty(&region[..end])
    }

    /// 每个字母的逐项解析：从 "A letra X ...:" 之后，到下一个逐项解析、下一道题或结尾
    fn alternative_explanations(&self, region: &str) -> [Option<String>; 5] {
        Letter::ALL.map(|letter| {
            let start = self.profile.alternative_explanation_for(letter)?.find(region)?;
            let rest = &region[start.end()..];

            let end = [
                self.profile.alternative_explanation_stop.find(rest),
                self.profile.boundary.find(rest),
            ]
            .into_iter()
            .flatten()
            .map(|m| m.start())
            .min()
            .unwrap_or(rest.len());

            non_empty(&rest[..end])
        })
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
