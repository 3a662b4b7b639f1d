//! 文本规范化
//!
//! NFKC 规范化后把全角空格替换为半角空格，使后续的模式匹配不再区分全角/半角

use unicode_normalization::UnicodeNormalization;

/// 全角空格
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// 页与页之间的分隔符
pub const PAGE_SEPARATOR: &str = "\n";

/// 规范化单段文本
pub fn normalize(text: &str) -> String {
    text.nfkc()
        .map(|c| if c == IDEOGRAPHIC_SPACE { ' ' } else { c })
        .collect()
}

/// 规范化后拼接成一个可搜索的文档
///
/// 每页单独规范化，再用换行拼接，页边界保留为换行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    text: String,
}

impl NormalizedDocument {
    pub fn from_pages<S: AsRef<str>>(pages: &[S]) -> Self {
        let text = pages
            .iter()
            .map(|page| normalize(page.as_ref()))
            .collect::<Vec<_>>()
            .join(PAGE_SEPARATOR);
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
