//! PDF 文本提取器 - 基础设施层
//!
//! 唯一依赖 pdf-extract 的地方，只暴露"按页取文本"的能力

use crate::error::{AppError, AppResult};
use std::path::Path;
use tracing::{debug, warn};

/// 按页排列的文本，取得后不再修改
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageTexts {
    pages: Vec<String>,
}

impl PageTexts {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// 所有页用换行拼接后的原文
    pub fn full_text(&self) -> String {
        self.pages.join("\n")
    }
}

/// PDF 文本提取器
///
/// 职责：
/// - 把 PDF 字节流解码为逐页文本
/// - 解码失败时原样向上返回错误
/// - 不认识 Question / AnswerKey
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// 从内存中的 PDF 提取逐页文本
    pub fn extract_pages(&self, bytes: &[u8]) -> AppResult<PageTexts> {
        let pages =
            pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(AppError::pdf_decode_failed)?;

        if pages.iter().all(|p| p.trim().is_empty()) {
            warn!("PDF 中没有可提取的文本，可能是扫描件");
        }
        debug!("PDF 解码完成: {} 页", pages.len());

        Ok(PageTexts::new(pages))
    }

    /// 读取 PDF 文件并提取逐页文本
    pub async fn read_file(&self, path: &Path) -> AppResult<PageTexts> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        self.extract_pages(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;

    #[test]
    fn test_invalid_bytes_fail_to_decode() {
        let result = PdfTextExtractor::new().extract_pages(b"not a pdf");
        assert!(matches!(result, Err(AppError::Pdf(PdfError::DecodeFailed { .. }))));
    }

    #[test]
    fn test_page_texts() {
        let texts = PageTexts::new(vec!["一".to_string(), "二".to_string()]);
        assert_eq!(texts.page_count(), 2);
        assert_eq!(texts.full_text(), "一\n二");
    }
}
