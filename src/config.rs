use crate::error::ConfigError;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 问题 PDF 路径
    pub question_pdf: Option<String>,
    /// 正答 PDF 路径（可选，缺省时从问题 PDF 末尾搜索）
    pub answer_pdf: Option<String>,
    /// 预置题库目录（设置后进入题库模式）
    pub pool_folder: Option<String>,
    /// 末尾搜索的页数
    pub tail_pages: usize,
    /// 随机种子，0 表示不固定
    pub rng_seed: u64,
    /// 只出选项数 >= 4 的题目
    pub only_full_options: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_pdf: None,
            answer_pdf: None,
            pool_folder: None,
            tail_pages: 4,
            rng_seed: 0,
            only_full_options: true,
            verbose_logging: false,
            output_log_file: "quiz_log.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            question_pdf: non_empty_var("QUESTION_PDF").or(default.question_pdf),
            answer_pdf: non_empty_var("ANSWER_PDF").or(default.answer_pdf),
            pool_folder: non_empty_var("POOL_FOLDER").or(default.pool_folder),
            tail_pages: std::env::var("TAIL_PAGES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.tail_pages),
            rng_seed: std::env::var("RNG_SEED").ok().and_then(|v| v.parse().ok()).unwrap_or(default.rng_seed),
            only_full_options: std::env::var("ONLY_FULL_OPTIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.only_full_options),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }

    /// 检查是否至少指定了一个输入源
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.question_pdf.is_none() && self.pool_folder.is_none() {
            return Err(ConfigError::MissingInput);
        }
        Ok(())
    }

    /// 出题所需的最少选项数
    pub fn min_options(&self) -> usize {
        if self.only_full_options {
            4
        } else {
            2
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
