//! 基础设施层
//!
//! PDF 解码与逐页文本提取，解析逻辑不在这里

pub mod pdf_text;

pub use pdf_text::{PageTexts, PdfTextExtractor};
