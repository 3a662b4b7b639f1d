//! 检测文档中的 "第N回"

use crate::models::round::Round;
use crate::services::label_resolver::z2h_digits;
use regex::Regex;
use std::sync::LazyLock;

static ROUND_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"第\s*(\d+)\s*回").expect("invalid round pattern"));

/// 返回第一个 "第N回" 中的 N，找不到时返回 [`Round::Unknown`]
pub fn detect_round(text: &str) -> Round {
    ROUND_MARKER
        .captures(text)
        .and_then(|caps| z2h_digits(&caps[1]).parse().ok())
        .map_or(Round::Unknown, Round::Known)
}
