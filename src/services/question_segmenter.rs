//! 问题切分
//!
//! 在规范化后的文档中查找两种题头：
//! - `【問題 12】`（数字可为全角）
//! - `第12問`
//!
//! 两种题头按出现位置合并排序，每个题头到下一个题头之间为一道题。

use crate::models::question::Question;
use crate::services::label_resolver::z2h_digits;
use crate::services::normalizer::NormalizedDocument;
use crate::services::option_extractor::extract_options;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, warn};

static BRACKETED_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"【\s*問題\s*([0-9０-９]+)\s*】").expect("invalid heading pattern")
});

static PREFIXED_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"第\s*([0-9]+)\s*問").expect("invalid heading pattern"));

/// 题头的写法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    /// 【問題 N】
    Bracketed,
    /// 第N問
    Prefixed,
}

/// 文档中找到的一个题头
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingMatch {
    pub style: HeadingStyle,
    pub number: u32,
    pub start: usize,
    pub end: usize,
}

fn collect_style(
    text: &str,
    regex: &Regex,
    style: HeadingStyle,
    heads: &mut Vec<HeadingMatch>,
) {
    for caps in regex.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let digits = z2h_digits(&caps[1]);
        match digits.parse::<u32>() {
            Ok(number) => heads.push(HeadingMatch {
                style,
                number,
                start: whole.start(),
                end: whole.end(),
            }),
            Err(e) => warn!("跳过无法解析的题号 '{}': {}", &caps[1], e),
        }
    }
}

/// 找出全部题头，按文档中的位置升序排列
pub fn find_headings(text: &str) -> Vec<HeadingMatch> {
    let mut heads = Vec::new();
    collect_style(text, &BRACKETED_HEADING, HeadingStyle::Bracketed, &mut heads);
    collect_style(text, &PREFIXED_HEADING, HeadingStyle::Prefixed, &mut heads);
    heads.sort_by_key(|h| h.start);
    heads
}

/// 把文档切成题目
///
/// 结果按题号升序；同一题号出现多次时，文档中靠后的一个生效。
/// 找不到题头时返回空列表。
pub fn segment(document: &NormalizedDocument) -> Vec<Question> {
    if document.is_empty() {
        return Vec::new();
    }
    let text = document.as_str();
    let heads = find_headings(text);
    debug!("找到 {} 个题头", heads.len());

    let mut by_number: BTreeMap<u32, Question> = BTreeMap::new();

    for (i, head) in heads.iter().enumerate() {
        let block_end = heads.get(i + 1).map_or(text.len(), |next| next.start);
        let block = text[head.start..block_end].trim();
        let body = if head.end < block_end {
            text[head.end..block_end].trim()
        } else {
            ""
        };

        let extracted = extract_options(body);
        let question = Question {
            number: head.number,
            stem: extracted.stem,
            options: extracted.options,
            raw_block: block.to_string(),
        };

        if by_number.insert(head.number, question).is_some() {
            debug!("题号 {} 重复出现，采用后出现的一个", head.number);
        }
    }

    by_number.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(pages: &[&str]) -> NormalizedDocument {
        NormalizedDocument::from_pages(pages)
    }

    fn numbers(questions: &[Question]) -> Vec<u32> {
        questions.iter().map(|q| q.number).collect()
    }

    #[test]
    fn test_find_headings_interleaves_styles() {
        let text = "第2問 x\n【問題 1】 y\n第3問 z";
        let heads = find_headings(text);
        let styles: Vec<_> = heads.iter().map(|h| (h.style, h.number)).collect();
        assert_eq!(
            styles,
            [
                (HeadingStyle::Prefixed, 2),
                (HeadingStyle::Bracketed, 1),
                (HeadingStyle::Prefixed, 3)
            ]
        );
        assert!(heads.windows(2).all(|w| w[0].start < w[1].start));
    }

    #[test]
    fn test_full_width_bracketed_number() {
        let questions = segment(&doc(&["【問題　１２】\n設問\n1) a\n2) b"]));
        assert_eq!(numbers(&questions), [12]);
        assert_eq!(questions[0].stem, "設問");
        assert_eq!(questions[0].options.len(), 2);
    }

    #[test]
    fn test_emitted_in_ascending_number() {
        let text = "【問題 3】\n三\n1) a\n【問題 1】\n一\n1) b\n【問題 2】\n二\n1) c";
        let questions = segment(&doc(&[text]));
        assert_eq!(numbers(&questions), [1, 2, 3]);
        assert_eq!(questions[0].stem, "一");
        assert_eq!(questions[2].stem, "三");
    }

    #[test]
    fn test_block_spans_to_next_heading() {
        let questions = segment(&doc(&["【問題 1】\n設問一\n1) a", "【問題 2】\n設問二\n1) b"]));
        assert_eq!(questions[0].raw_block, "【問題 1】\n設問一\n1) a");
        assert_eq!(questions[1].raw_block, "【問題 2】\n設問二\n1) b");
    }

    #[test]
    fn test_duplicate_number_last_wins() {
        let text = "第5問\n最初\n1) a\n第5問\n二回目\n1) b";
        let questions = segment(&doc(&[text]));
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].stem, "二回目");
    }

    #[test]
    fn test_no_headings_yields_empty() {
        assert!(segment(&doc(&["見出しのない文書", "1) a"])).is_empty());
        assert!(segment(&doc(&[])).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let d = doc(&["【問題 1】\nA\n1) x\n【問題 2】\nB\n1) y"]);
        assert_eq!(segment(&d), segment(&d));
    }
}
