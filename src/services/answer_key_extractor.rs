//! 正答表抽出
//!
//! 三种写法分别扫描，各自得到一个候选映射：
//! 1. `【問題 12】 4`
//! 2. `第12問 B`
//! 3. `12 : 3` / `12 D`
//!
//! 之后按 1 → 2 → 3 的顺序合并，同一题号以后面的结果为准。
//! 每次扫描内部也是后出现的覆盖先出现的。

use crate::models::answer_key::{AnswerKey, AnswerMap};
use crate::services::label_resolver::{resolve, z2h_digits};
use crate::services::normalizer::NormalizedDocument;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

/// 未提供正答 PDF 时，从问题 PDF 末尾搜索的默认页数
pub const DEFAULT_TAIL_PAGES: usize = 4;

static BRACKETED_ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"【\s*問題\s*([0-9０-９]+)\s*】\s*[:：\s]*([1-5１-５A-EＡ-Ｅア-エ])")
        .expect("invalid answer pattern")
});

static PREFIXED_ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"第\s*([0-9]+)\s*問\s*[:：\s]*([1-5A-EＡ-Ｅア-エ１-５])")
        .expect("invalid answer pattern")
});

static BARE_ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]+)\s*[:：\s]\s*([1-5A-EＡ-Ｅア-エ１-５])\b")
        .expect("invalid answer pattern")
});

fn scan(text: &str, regex: &Regex) -> AnswerMap {
    let mut answers = AnswerMap::new();
    for caps in regex.captures_iter(text) {
        match z2h_digits(&caps[1]).parse::<u32>() {
            Ok(number) => {
                answers.insert(number, resolve(&caps[2]));
            }
            Err(e) => warn!("跳过无法解析的正答题号 '{}': {}", &caps[1], e),
        }
    }
    answers
}

/// `【問題 N】 X`
pub fn scan_bracketed(text: &str) -> AnswerMap {
    scan(text, &BRACKETED_ANSWER)
}

/// `第N問 X`
pub fn scan_prefixed(text: &str) -> AnswerMap {
    scan(text, &PREFIXED_ANSWER)
}

/// `N : X` / `N X`
pub fn scan_bare(text: &str) -> AnswerMap {
    scan(text, &BARE_ANSWER)
}

/// 依次合并，后面的映射覆盖前面的
pub fn merge_last_wins<I>(passes: I) -> AnswerMap
where
    I: IntoIterator<Item = AnswerMap>,
{
    passes.into_iter().fold(AnswerMap::new(), |mut merged, pass| {
        merged.extend(pass);
        merged
    })
}

/// 对规范化后的文本执行三种扫描并合并
pub fn extract_answers(document: &NormalizedDocument) -> AnswerKey {
    let text = document.as_str();
    let passes = [scan_bracketed(text), scan_prefixed(text), scan_bare(text)];
    debug!(
        "正答扫描: 【問題N】 {} 条, 第N問 {} 条, N:X {} 条",
        passes[0].len(),
        passes[1].len(),
        passes[2].len()
    );
    AnswerKey::from(merge_last_wins(passes))
}

/// 从正答 PDF 的全部页中抽出正答表
pub fn parse_answers_from_document<S: AsRef<str>>(pages: &[S]) -> AnswerKey {
    extract_answers(&NormalizedDocument::from_pages(pages))
}

/// 只扫描问题 PDF 的最后 `tail_pages` 页
///
/// 页数不足时扫描全部页；`tail_pages` 为 0 时也扫描全部页
pub fn parse_answers_from_tail<S: AsRef<str>>(pages: &[S], tail_pages: usize) -> AnswerKey {
    let start = if tail_pages == 0 {
        0
    } else {
        pages.len().saturating_sub(tail_pages)
    };
    info!("从第 {} 页起搜索正答（共 {} 页）", start + 1, pages.len());
    parse_answers_from_document(&pages[start..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::Label;

    #[test]
    fn test_bracketed_pass() {
        let map = scan_bracketed("【問題 1】 3\n【問題１２】：Ｄ\n【問題 7】ウ");
        assert_eq!(map.get(&1), Some(&Label::C));
        assert_eq!(map.get(&12), Some(&Label::D));
        assert_eq!(map.get(&7), Some(&Label::C));
    }

    #[test]
    fn test_prefixed_pass() {
        let map = scan_prefixed("第3問 B 第4問:2");
        assert_eq!(map.get(&3), Some(&Label::B));
        assert_eq!(map.get(&4), Some(&Label::B));
    }

    #[test]
    fn test_bare_pass() {
        let map = scan_bare("1 : 3\n2 D\n10:ア");
        assert_eq!(map.get(&1), Some(&Label::C));
        assert_eq!(map.get(&2), Some(&Label::D));
        assert_eq!(map.get(&10), Some(&Label::A));
    }

    #[test]
    fn test_bare_pass_needs_word_boundary() {
        // 第12問 的 12 前面是汉字，不构成词边界
        assert!(scan_bare("第12問 B").is_empty());
        // 后面紧跟字母也不算
        assert!(scan_bare("1 Bx").is_empty());
    }

    #[test]
    fn test_later_pass_wins() {
        let key = parse_answers_from_document(&["【問題 1】 3", "正答一覧", "1 : B"]);
        assert_eq!(key.get(1), Some(&Label::B));
        assert_eq!(key.len(), 1);
    }

    #[test]
    fn test_merge_order_is_explicit() {
        let first = AnswerMap::from([(1, Label::A), (2, Label::B)]);
        let second = AnswerMap::from([(2, Label::E)]);
        let merged = merge_last_wins([first.clone(), second.clone()]);
        assert_eq!(merged.get(&1), Some(&Label::A));
        assert_eq!(merged.get(&2), Some(&Label::E));

        let reversed = merge_last_wins([second, first]);
        assert_eq!(reversed.get(&2), Some(&Label::B));
    }

    #[test]
    fn test_overflowing_number_is_skipped() {
        let map = scan_bracketed("【問題 99999999999】 3\n【問題 2】 4");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&2), Some(&Label::D));
    }

    #[test]
    fn test_small_kana_passes_through() {
        let map = scan_bracketed("【問題 9】 ィ");
        assert_eq!(map.get(&9), Some(&Label::Unresolved("ィ".to_string())));
    }

    #[test]
    fn test_tail_only_scans_last_pages() {
        let mut pages: Vec<String> = (1..=10).map(|i| format!("page {}", i)).collect();
        pages[1] = "【問題 1】 1".to_string();
        pages[8] = "【問題 2】 2".to_string();

        let key = parse_answers_from_tail(&pages, DEFAULT_TAIL_PAGES);
        assert_eq!(key.get(1), None);
        assert_eq!(key.get(2), Some(&Label::B));
    }

    #[test]
    fn test_tail_larger_than_document() {
        let key = parse_answers_from_tail(&["【問題 1】 1"], DEFAULT_TAIL_PAGES);
        assert_eq!(key.get(1), Some(&Label::A));
    }

    #[test]
    fn test_no_answers_is_empty() {
        assert!(parse_answers_from_document(&["解答なし"]).is_empty());
    }
}
