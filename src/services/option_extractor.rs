//! 选项抽出
//!
//! 从一道题的本文中分离出设问本文和行首带编号的选项。
//! 按行扫描找不到任何选项时，改为在"换行 + 选项记号"处切分再匹配一次。
//! 同一标签只保留第一次出现的选项（例如先列 ア〜エ 的陈述、再列 1)〜5) 的选项时，
//! 1)〜4) 与 ア〜エ 标签重复而被丢弃）。

use crate::models::question::{Label, QuestionOption};
use crate::services::label_resolver::{resolve_digit, resolve_kana, resolve_latin};
use regex::Regex;
use std::sync::LazyLock;

/// 最多保留的选项数
pub const MAX_OPTIONS: usize = 5;

/// 一种选项写法：匹配规则 + 标签解析
pub struct OptionPattern {
    pub name: &'static str,
    regex: Regex,
    resolve: fn(&str) -> Label,
}

impl OptionPattern {
    fn new(name: &'static str, pattern: &str, resolve: fn(&str) -> Label) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("invalid option pattern"),
            resolve,
        }
    }

    /// 匹配成功时返回 (标签, 去掉记号后的文本)
    pub fn try_match(&self, text: &str) -> Option<QuestionOption> {
        let caps = self.regex.captures(text)?;
        let label = (self.resolve)(&caps[1]);
        Some(QuestionOption::new(label, caps[2].trim()))
    }
}

/// 按顺序尝试的选项写法：数字、拉丁字母、片假名
pub static OPTION_PATTERNS: LazyLock<[OptionPattern; 3]> = LazyLock::new(|| {
    [
        OptionPattern::new("digit", r"^([1-5１-５])\s*[)）.．]\s*(.+)$", resolve_digit),
        OptionPattern::new("latin", r"^([A-EＡ-Ｅ])\s*[)）.．]\s*(.+)$", resolve_latin),
        OptionPattern::new("kana", r"^(ア|イ|ウ|エ)\s*[)）.．]\s*(.+)$", resolve_kana),
    ]
});

/// 切分时使用的写法（不含片假名）
fn fallback_patterns() -> &'static [OptionPattern] {
    &OPTION_PATTERNS[..2]
}

/// 换行后紧跟选项记号的位置
static OPTION_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n[1-5１-５A-EＡ-Ｅア-エ]\s*[)）.．]").expect("invalid boundary pattern")
});

/// 抽出结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedOptions {
    pub stem: String,
    pub options: Vec<QuestionOption>,
}

// 标签已存在时丢弃
fn push_unique(options: &mut Vec<QuestionOption>, option: QuestionOption) {
    if options.iter().any(|o| o.label == option.label) {
        tracing::debug!(label = %option.label, "标签重复，丢弃选项: {}", option.text);
        return;
    }
    options.push(option);
}

fn match_first(patterns: &[OptionPattern], text: &str) -> Option<QuestionOption> {
    patterns.iter().find_map(|p| {
        let option = p.try_match(text)?;
        tracing::trace!(pattern = p.name, label = %option.label, "选项匹配");
        Some(option)
    })
}

/// 在每个"换行 + 选项记号"之前切开，换行本身被丢弃
fn split_before_options(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut last = 0;
    for m in OPTION_BOUNDARY.find_iter(body) {
        parts.push(&body[last..m.start()]);
        last = m.start() + 1;
    }
    parts.push(&body[last..]);
    parts
}

fn extract_fallback(body: &str) -> Option<ExtractedOptions> {
    let parts = split_before_options(body);
    if parts.len() < 2 {
        return None;
    }

    let mut options = Vec::new();
    for part in &parts[1..] {
        if let Some(option) = match_first(fallback_patterns(), part.trim()) {
            push_unique(&mut options, option);
        }
    }

    Some(ExtractedOptions {
        stem: parts[0].trim().to_string(),
        options,
    })
}

// 换页符等也视为换行
fn split_lines(body: &str) -> impl Iterator<Item = &str> {
    body.split(|c: char| {
        matches!(
            c,
            '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
    })
}

/// 从题目本文中抽出设问和选项
pub fn extract_options(body: &str) -> ExtractedOptions {
    let mut options = Vec::new();
    let mut stem_lines = Vec::new();

    for line in split_lines(body).map(str::trim).filter(|l| !l.is_empty()) {
        match match_first(OPTION_PATTERNS.as_slice(), line) {
            Some(option) => push_unique(&mut options, option),
            None => stem_lines.push(line),
        }
    }

    let mut extracted = ExtractedOptions {
        stem: stem_lines.join("\n"),
        options,
    };

    if extracted.options.is_empty() {
        if let Some(fallback) = extract_fallback(body) {
            tracing::debug!("按行未找到选项，切分后找到 {} 个", fallback.options.len());
            extracted = fallback;
        }
    }

    extracted.stem = extracted.stem.trim().to_string();
    extracted.options.truncate(MAX_OPTIONS);
    extracted
}
