use crate::error::{AppResult, ConfigError, FileError};
use crate::models::question::ExamMetadata;
use std::path::Path;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 输入：单个 PDF 或存放 PDF 的目录
    pub input_path: String,
    /// JSON 输出目录
    pub output_dir: String,
    /// 版式 TOML 文件（为空则使用内置 SES-PE 版式）
    pub profile_path: Option<String>,
    /// 是否同时导出逐页原文
    pub dump_raw_text: bool,
    /// 是否使用顺序 ID（便于对比输出）
    pub deterministic_ids: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 需要人工检查的文档/题目写到这里
    pub audit_file: String,
    // --- 试卷常量（PDF 旁没有同名 .toml 时使用） ---
    pub exam: ExamMetadata,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: "provas".to_string(),
            output_dir: "output_json".to_string(),
            profile_path: None,
            dump_raw_text: false,
            deterministic_ids: false,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            audit_file: "audit.txt".to_string(),
            exam: ExamMetadata::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            input_path: std::env::var("INPUT_PATH").unwrap_or(default.input_path),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            profile_path: std::env::var("LAYOUT_PROFILE").ok().filter(|v| !v.trim().is_empty()),
            dump_raw_text: std::env::var("DUMP_RAW_TEXT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.dump_raw_text),
            deterministic_ids: std::env::var("DETERMINISTIC_IDS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.deterministic_ids),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            audit_file: std::env::var("AUDIT_FILE").unwrap_or(default.audit_file),
            exam: ExamMetadata {
                title: std::env::var("EXAM_TITLE").unwrap_or(default.exam.title),
                source: std::env::var("EXAM_SOURCE").unwrap_or(default.exam.source),
                subject: match std::env::var("EXAM_SUBJECT") {
                    Ok(v) if v.trim().is_empty() => None,
                    Ok(v) => Some(v),
                    Err(_) => default.exam.subject,
                },
                county: std::env::var("EXAM_COUNTY").unwrap_or(default.exam.county),
                year: std::env::var("EXAM_YEAR").ok().and_then(|v| v.parse().ok()).unwrap_or(default.exam.year),
            },
        }
    }

    /// 检查输入路径和年份是否可用
    pub fn validate(&self) -> AppResult<()> {
        let input = Path::new(&self.input_path);
        if !input.exists() {
            return Err(FileError::NotFound {
                path: self.input_path.clone(),
            }
            .into());
        }
        if input.is_file() {
            let is_pdf = input
                .extension()
                .and_then(|s| s.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false);
            if !is_pdf {
                return Err(ConfigError::InvalidInput {
                    path: self.input_path.clone(),
                }
                .into());
            }
        }
        if self.exam.year <= 0 {
            return Err(ConfigError::EnvVarParseFailed {
                var_name: "EXAM_YEAR".to_string(),
                value: self.exam.year.to_string(),
                expected_type: "正整数年份".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
