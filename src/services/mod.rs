//! 业务能力层
//!
//! 问题 PDF / 正答 PDF 文本的解析能力，全部为纯函数

pub mod answer_key_extractor;
pub mod label_resolver;
pub mod normalizer;
pub mod option_extractor;
pub mod question_segmenter;
pub mod round_detector;

pub use answer_key_extractor::{
    parse_answers_from_document, parse_answers_from_tail, DEFAULT_TAIL_PAGES,
};
pub use normalizer::{normalize, NormalizedDocument};
pub use round_detector::detect_round;

use crate::models::question::Question;

/// 从问题 PDF 的各页文本中抽出题目，按题号升序
pub fn parse_questions<S: AsRef<str>>(pages: &[S]) -> Vec<Question> {
    question_segmenter::segment(&NormalizedDocument::from_pages(pages))
}
