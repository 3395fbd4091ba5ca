use crate::models::letter::Letter;
use serde::{Deserialize, Serialize};

/// 单个选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub letter: Letter,
    pub alternative_text: Option<String>,
    pub is_correct: bool,
    pub explanation_alternative: Option<String>,
}

/// 一道题的结构化记录（输出实体）
///
/// 字段顺序即 JSON 输出顺序。`alternatives` 固定 5 项，字母依次为 A–E。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u64,
    pub external_id: Option<u64>,
    pub title: String,
    pub source: String,
    pub subject: Option<String>,
    pub county: String,
    pub year: i32,
    pub question_text: String,
    pub has_image: bool,
    pub image_path: Option<String>,
    pub image_description: Option<String>,
    pub alternatives: [Alternative; 5],
    pub explanation_question: Option<String>,
    pub has_reference: bool,
    pub reference: Option<String>,
}

/// 从题目块中抽取出的字段（不含 id 与试卷常量）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub external_id: Option<u64>,
    pub answer_key: Option<Letter>,
    pub question_text: String,
    /// 按位置对应 A–E 的选项文本
    pub alternative_texts: [Option<String>; 5],
    /// 按位置对应 A–E 的逐项解析
    pub alternative_explanations: [Option<String>; 5],
    pub explanation_question: Option<String>,
    pub reference: Option<String>,
}

impl QuestionRecord {
    /// 组装记录
    ///
    /// `is_correct` 只会出现在与答案字母相同的选项上；没有答案时全部为 false。
    /// `has_reference` 由 `reference` 推导。
    pub fn assemble(id: u64, fields: ExtractedFields, metadata: &ExamMetadata) -> Self {
        let ExtractedFields {
            external_id,
            answer_key,
            question_text,
            alternative_texts,
            alternative_explanations,
            explanation_question,
            reference,
        } = fields;

        let mut texts = alternative_texts.into_iter();
        let mut explanations = alternative_explanations.into_iter();
        let alternatives = Letter::ALL.map(|letter| Alternative {
            letter,
            alternative_text: texts.next().flatten(),
            is_correct: answer_key == Some(letter),
            explanation_alternative: explanations.next().flatten(),
        });

        Self {
            id,
            external_id,
            title: metadata.title.clone(),
            source: metadata.source.clone(),
            subject: metadata.subject.clone(),
            county: metadata.county.clone(),
            year: metadata.year,
            question_text,
            has_image: false,
            image_path: None,
            image_description: None,
            alternatives,
            explanation_question,
            has_reference: reference.is_some(),
            reference,
        }
    }

    /// 被标记为正确的选项字母
    pub fn correct_letter(&self) -> Option<Letter> {
        self.alternatives
            .iter()
            .find(|alt| alt.is_correct)
            .map(|alt| alt.letter)
    }

    /// 实际找到文本的选项数量
    pub fn found_alternatives(&self) -> usize {
        self.alternatives
            .iter()
            .filter(|alt| alt.alternative_text.is_some())
            .count()
    }
}

/// 试卷常量：对同一份文档的所有题目统一适用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamMetadata {
    pub title: String,
    pub source: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub county: String,
    #[serde(deserialize_with = "deserialize_year")]
    pub year: i32,
}

impl Default for ExamMetadata {
    fn default() -> Self {
        Self {
            title: "SES-PE 2023 - Clínica Médica".to_string(),
            source: "SES-PE".to_string(),
            subject: Some("Clínica Médica".to_string()),
            county: "PE".to_string(),
            year: 2023,
        }
    }
}

// Helper function to deserialize year as either string or integer
fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct YearVisitor;

    impl<'de> Visitor<'de> for YearVisitor {
        type Value = i32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer representing a year")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            value
                .trim()
                .parse::<i32>()
                .map_err(|_| E::custom(format!("无法解析年份: {}", value)))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            i32::try_from(value).map_err(|_| E::custom(format!("年份超出范围: {}", value)))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            i32::try_from(value).map_err(|_| E::custom(format!("年份超出范围: {}", value)))
        }
    }

    deserializer.deserialize_any(YearVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_with_key(key: Option<Letter>) -> ExtractedFields {
        ExtractedFields {
            answer_key: key,
            question_text: "Enunciado".to_string(),
            alternative_texts: [
                Some("um".to_string()),
                Some("dois".to_string()),
                Some("três".to_string()),
                None,
                None,
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_assemble_marks_only_answer_key() {
        let record = QuestionRecord::assemble(7, fields_with_key(Some(Letter::B)), &ExamMetadata::default());

        assert_eq!(record.correct_letter(), Some(Letter::B));
        assert_eq!(record.alternatives.iter().filter(|a| a.is_correct).count(), 1);
        assert_eq!(record.found_alternatives(), 3);
        assert_eq!(record.alternatives[3].alternative_text, None);
        assert_eq!(record.alternatives[4].letter, Letter::E);
    }

    #[test]
    fn test_assemble_without_key_marks_nothing() {
        let record = QuestionRecord::assemble(1, fields_with_key(None), &ExamMetadata::default());
        assert!(record.alternatives.iter().all(|a| !a.is_correct));
        assert!(!record.has_reference);
        assert!(!record.has_image);
    }

    #[test]
    fn test_json_field_order() {
        let record = QuestionRecord::assemble(1, fields_with_key(None), &ExamMetadata::default());
        let json = serde_json::to_string(&record).unwrap();
        let id_pos = json.find("\"id\"").unwrap();
        let text_pos = json.find("\"question_text\"").unwrap();
        let ref_pos = json.find("\"reference\"").unwrap();
        assert!(id_pos < text_pos && text_pos < ref_pos);
        assert!(json.contains("\"subject\":\"Clínica Médica\""));
    }

    #[test]
    fn test_year_accepts_string_or_integer() {
        let from_int: ExamMetadata =
            toml::from_str("title = \"t\"\nsource = \"s\"\ncounty = \"PE\"\nyear = 2022").unwrap();
        let from_str: ExamMetadata =
            toml::from_str("title = \"t\"\nsource = \"s\"\ncounty = \"PE\"\nyear = \"2021\"").unwrap();
        assert_eq!(from_int.year, 2022);
        assert_eq!(from_str.year, 2021);
        assert_eq!(from_int.subject, None);
    }
}
