//! 版式配置
//!
//! 一个文档家族（例如 SES-PE 题集）的全部版式正则都集中在这里，
//! 清洗、切分、抽取三个阶段只使用编译后的 [`CompiledProfile`]。

use crate::error::ProfileError;
use crate::models::letter::Letter;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 逐项解析模板中的字母占位符
pub const LETTER_PLACEHOLDER: &str = "{letter}";

/// 带名字的正则（用于页眉页脚噪声）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedPattern {
    pub name: String,
    pub pattern: String,
}

impl NamedPattern {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// 文档家族的版式正则集合（未编译）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutProfile {
    pub name: String,
    /// 页眉页脚噪声，按顺序逐个删除
    pub noise_patterns: Vec<NamedPattern>,
    /// 题目分界（"Questão" + 元数据行）
    pub boundary: String,
    /// 外部 ID，第 1 个捕获组为 ID
    pub external_id: String,
    /// 题干前的元数据行
    pub header_line: String,
    /// 答案，第 1 个捕获组为字母
    pub answer_key: String,
    /// 解析开始标记（Solução / Comentário / Gabarito 等）
    pub explanation_marker: String,
    /// 参考文献，第 1 个捕获组为内容
    pub reference: String,
    /// 选项标记 A)..E)
    pub alternative_marker: String,
    /// 逐项解析的起始句，包含 `{letter}` 占位符
    pub alternative_explanation: String,
    /// 逐项解析的结束句（下一项的起始）
    pub alternative_explanation_stop: String,
}

impl LayoutProfile {
    /// SES-PE 题集的默认版式
    pub fn ses_pe() -> Self {
        Self {
            name: "ses-pe".to_string(),
            noise_patterns: vec![
                NamedPattern::new("secao_com_ano", r"\b\d{1,3}\.\d{1,3}\s*SES-PE\s*-\s*\d{4}\b"),
                NamedPattern::new("secao", r"\b\d{1,3}\.\d{1,3}\s*SES-PE\b"),
                NamedPattern::new("capitulo", r"\b\d{1,3}\.\s*SES-PE(?:\s*-\s*\d{4})?\b"),
                NamedPattern::new("fonte_com_ano", r"\bSES-PE\s*-\s*\d{4}\b"),
                // 只删除独占一行的页码
                NamedPattern::new("paginacao", r"(?m)^[ \t]*\d{1,3}/\d{1,4}[ \t]*$"),
            ],
            boundary: r"Quest[aã]o\s*\n\|\s*\|\s*\d{4}\s*\|\s*\d{10}".to_string(),
            external_id: r"\|\s*\|\s*\d{4}\s*\|\s*(\d{10})".to_string(),
            header_line: r"Quest[aã]o\s*\|\s*\|[^\n]*\n?".to_string(),
            answer_key: r"(?i)Gabarito:\s*ALTERNATIVA\s+([A-E])\b".to_string(),
            explanation_marker: r"(?im)^[ \t]*(?:Solu[cç][aã]o|Coment[aá]rios?|Estrategista)\b[^\n:]*:?|Gabarito:[^\n]*"
                .to_string(),
            reference: r"(?is)Refer[eêa]ncias?[^:\n]*:\s*(.+?)(?:\n[ \t]*\n|\z)".to_string(),
            alternative_marker: r"\n?[A-E]\)".to_string(),
            alternative_explanation: r"(?i)\bA letra {letter}\b[^:\n]*:".to_string(),
            alternative_explanation_stop: r"(?i)\bA letra [A-E]\b".to_string(),
        }
    }

    /// 编译全部正则
    ///
    /// # 返回
    /// 任一模式为空或无法编译时返回 [`ProfileError`]，错误中带模式名
    pub fn compile(&self) -> Result<CompiledProfile, ProfileError> {
        let noise = self
            .noise_patterns
            .iter()
            .map(|p| Ok((p.name.clone(), self.compile_one(&p.name, &p.pattern)?)))
            .collect::<Result<Vec<_>, ProfileError>>()?;

        if !self.alternative_explanation.contains(LETTER_PLACEHOLDER) {
            return Err(ProfileError::MissingLetterPlaceholder {
                profile: self.name.clone(),
                pattern: "alternative_explanation".to_string(),
            });
        }

        let mut alternative_explanation = Vec::with_capacity(Letter::ALL.len());
        for letter in Letter::ALL {
            let pattern = self
                .alternative_explanation
                .replace(LETTER_PLACEHOLDER, &letter.to_string());
            alternative_explanation.push(self.compile_one("alternative_explanation", &pattern)?);
        }

        Ok(CompiledProfile {
            name: self.name.clone(),
            noise,
            boundary: self.compile_one("boundary", &self.boundary)?,
            external_id: self.compile_one("external_id", &self.external_id)?,
            header_line: self.compile_one("header_line", &self.header_line)?,
            answer_key: self.compile_one("answer_key", &self.answer_key)?,
            explanation_marker: self.compile_one("explanation_marker", &self.explanation_marker)?,
            reference: self.compile_one("reference", &self.reference)?,
            alternative_marker: self.compile_one("alternative_marker", &self.alternative_marker)?,
            alternative_explanation,
            alternative_explanation_stop: self
                .compile_one("alternative_explanation_stop", &self.alternative_explanation_stop)?,
        })
    }

    fn compile_one(&self, pattern_name: &str, pattern: &str) -> Result<Regex, ProfileError> {
        if pattern.trim().is_empty() {
            return Err(ProfileError::EmptyPattern {
                profile: self.name.clone(),
                pattern: pattern_name.to_string(),
            });
        }
        Regex::new(pattern).map_err(|source| ProfileError::InvalidPattern {
            profile: self.name.clone(),
            pattern: pattern_name.to_string(),
            source,
        })
    }
}

impl Default for LayoutProfile {
    fn default() -> Self {
        Self::ses_pe()
    }
}

/// 编译后的版式，只读，可在多个文档之间复用
#[derive(Debug, Clone)]
pub struct CompiledProfile {
    pub name: String,
    pub noise: Vec<(String, Regex)>,
    pub boundary: Regex,
    pub external_id: Regex,
    pub header_line: Regex,
    pub answer_key: Regex,
    pub explanation_marker: Regex,
    pub reference: Regex,
    pub alternative_marker: Regex,
    /// 按 A–E 顺序
    pub alternative_explanation: Vec<Regex>,
    pub alternative_explanation_stop: Regex,
}

impl CompiledProfile {
    /// 某个字母的逐项解析起始句
    pub fn alternative_explanation_for(&self, letter: Letter) -> Option<&Regex> {
        self.alternative_explanation.get(letter.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_compiles() {
        let compiled = LayoutProfile::default().compile().unwrap();
        assert_eq!(compiled.name, "ses-pe");
        assert_eq!(compiled.noise.len(), 5);
        assert_eq!(compiled.alternative_explanation.len(), 5);
        assert!(compiled
            .alternative_explanation_for(Letter::C)
            .unwrap()
            .is_match("A letra C está correta:"));
    }

    #[test]
    fn test_invalid_pattern_reports_name() {
        let profile = LayoutProfile {
            boundary: "Quest(".to_string(),
            ..LayoutProfile::ses_pe()
        };
        match profile.compile() {
            Err(ProfileError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "boundary"),
            other => panic!("应当报告 boundary 编译失败, 实际: {:?}", other.map(|p| p.name)),
        }
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let profile = LayoutProfile {
            reference: "  ".to_string(),
            ..LayoutProfile::ses_pe()
        };
        assert!(matches!(
            profile.compile(),
            Err(ProfileError::EmptyPattern { .. })
        ));
    }

    #[test]
    fn test_template_requires_placeholder() {
        let profile = LayoutProfile {
            alternative_explanation: r"A letra X:".to_string(),
            ..LayoutProfile::ses_pe()
        };
        assert!(matches!(
            profile.compile(),
            Err(ProfileError::MissingLetterPlaceholder { .. })
        ));
    }
}
