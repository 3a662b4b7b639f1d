//! 选项/正答记号 → A〜E 标签
//!
//! 支持 半角数字、全角数字、拉丁字母、全角拉丁字母 以及 ア/イ/ウ/エ 四个片假名。
//! 片假名只有四个，没有对应第五个选项的写法。

use crate::models::question::Label;
use phf::phf_map;

static DIGIT_LABELS: phf::Map<char, Label> = phf_map! {
    '1' => Label::A,
    '2' => Label::B,
    '3' => Label::C,
    '4' => Label::D,
    '5' => Label::E,
};

static FULL_WIDTH_LATIN_LABELS: phf::Map<char, Label> = phf_map! {
    'Ａ' => Label::A,
    'Ｂ' => Label::B,
    'Ｃ' => Label::C,
    'Ｄ' => Label::D,
    'Ｅ' => Label::E,
};

static LATIN_LABELS: phf::Map<char, Label> = phf_map! {
    'A' => Label::A,
    'B' => Label::B,
    'C' => Label::C,
    'D' => Label::D,
    'E' => Label::E,
};

static KANA_LABELS: phf::Map<char, Label> = phf_map! {
    'ア' => Label::A,
    'イ' => Label::B,
    'ウ' => Label::C,
    'エ' => Label::D,
};

/// 全角数字转半角，其余字符不变
pub fn z2h_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            _ => c,
        })
        .collect()
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn lookup(table: &phf::Map<char, Label>, token: &str) -> Option<Label> {
    single_char(token).and_then(|c| table.get(&c).cloned())
}

fn or_unresolved(label: Option<Label>, token: &str) -> Label {
    label.unwrap_or_else(|| Label::Unresolved(token.to_string()))
}

/// 数字记号（半角/全角）
pub fn resolve_digit(token: &str) -> Label {
    or_unresolved(lookup(&DIGIT_LABELS, &z2h_digits(token)), token)
}

/// 拉丁字母记号（半角/全角）
pub fn resolve_latin(token: &str) -> Label {
    or_unresolved(
        lookup(&FULL_WIDTH_LATIN_LABELS, token).or_else(|| lookup(&LATIN_LABELS, token)),
        token,
    )
}

/// 片假名记号
pub fn resolve_kana(token: &str) -> Label {
    or_unresolved(lookup(&KANA_LABELS, token), token)
}

/// 任意记号
///
/// 顺序：数字 → 全角字母 → 片假名；半角字母原样对应。无法识别时原样返回。
pub fn resolve(token: &str) -> Label {
    let token = token.trim();
    let half = z2h_digits(token);
    lookup(&DIGIT_LABELS, &half)
        .or_else(|| lookup(&FULL_WIDTH_LATIN_LABELS, &half))
        .or_else(|| lookup(&KANA_LABELS, &half))
        .or_else(|| lookup(&LATIN_LABELS, &half))
        .unwrap_or(Label::Unresolved(half))
}
