use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// PDF 读取错误
    #[error("PDF错误: {0}")]
    Pdf(#[from] PdfError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 版式配置错误
    #[error("版式配置错误: {0}")]
    Profile(#[from] ProfileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// PDF 读取错误
#[derive(Debug, Error)]
pub enum PdfError {
    /// 打开/解析 PDF 失败
    #[error("无法加载PDF ({path}): {source}")]
    LoadFailed {
        path: String,
        #[source]
        source: lopdf::Error,
    },
    /// PDF 没有任何页面
    #[error("PDF没有页面: {path}")]
    NoPages { path: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 序列化失败
    #[error("JSON序列化失败: {source}")]
    JsonFailed {
        #[source]
        source: serde_json::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 版式配置（正则集合）错误
#[derive(Debug, Error)]
pub enum ProfileError {
    /// 正则为空
    #[error("版式 {profile} 的模式 {pattern} 为空")]
    EmptyPattern { profile: String, pattern: String },
    /// 正则编译失败
    #[error("版式 {profile} 的模式 {pattern} 无法编译: {source}")]
    InvalidPattern {
        profile: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// 逐项解析模板缺少 {letter} 占位符
    #[error("版式 {profile} 的模式 {pattern} 缺少 {{letter}} 占位符")]
    MissingLetterPlaceholder { profile: String, pattern: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 输入路径既不是 PDF 也不是目录
    #[error("输入路径无效: {path}")]
    InvalidInput { path: String },
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::File(FileError::JsonFailed { source: err })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建TOML解析错误
    pub fn toml_parse_failed(path: impl Into<String>, source: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建PDF加载错误
    pub fn pdf_load_failed(path: impl Into<String>, source: lopdf::Error) -> Self {
        AppError::Pdf(PdfError::LoadFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
