use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// PDF 解码错误
    #[error("PDF错误: {0}")]
    Pdf(#[from] PdfError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 题库（预置题集）错误
    #[error("题库错误: {0}")]
    Pool(#[from] PoolError),
    /// 出题错误
    #[error("出题错误: {0}")]
    Quiz(#[from] QuizError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// PDF 解码错误
///
/// 解码器返回的错误原样作为 source 保留，不做恢复
#[derive(Debug, Error)]
pub enum PdfError {
    /// 字节流不是有效的 PDF
    #[error("PDF解码失败: {source}")]
    DecodeFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
}

/// 题库文件错误
#[derive(Debug, Error)]
pub enum PoolError {
    /// JSON 解析失败
    #[error("JSON解析失败 ({path}): {source}")]
    JsonParseFailed {
        path: String,
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

/// 出题流程错误
#[derive(Debug, Error)]
pub enum QuizError {
    /// 过滤后没有可出的题目
    #[error("没有可出题的题目 (共 {total} 题, 要求选项数 >= {min_options})")]
    NoSelectableQuestion { total: usize, min_options: usize },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 既没有问题 PDF 也没有题库目录
    #[error("请设置 QUESTION_PDF 或 POOL_FOLDER 其中之一")]
    MissingInput,
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建 PDF 解码错误
    pub fn pdf_decode_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Pdf(PdfError::DecodeFailed {
            source: Box::new(source),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
