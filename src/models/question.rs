use serde::{Deserialize, Serialize};
use std::fmt;

/// 选项标签
///
/// 统一成 A〜E；无法识别的记号原样保留在 `Unresolved` 中，由调用方自行处理
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Label {
    A,
    B,
    C,
    D,
    E,
    Unresolved(String),
}

impl Label {
    pub fn as_str(&self) -> &str {
        match self {
            Label::A => "A",
            Label::B => "B",
            Label::C => "C",
            Label::D => "D",
            Label::E => "E",
            Label::Unresolved(raw) => raw,
        }
    }

    /// 是否为 A〜E 之一
    pub fn is_canonical(&self) -> bool {
        !matches!(self, Label::Unresolved(_))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.as_str().to_string()
    }
}

impl From<String> for Label {
    fn from(token: String) -> Self {
        crate::services::label_resolver::resolve(&token)
    }
}

/// 单个选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub label: Label,
    pub text: String,
}

impl QuestionOption {
    pub fn new(label: Label, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// 从 PDF 中抽出的一道题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// 问题编号
    pub number: u32,
    /// 设问本文，可能为空
    pub stem: String,
    /// 最多 5 个选项，按出现顺序
    pub options: Vec<QuestionOption>,
    /// 问题块原文
    pub raw_block: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serde_as_string() {
        let json = serde_json::to_string(&Label::C).unwrap();
        assert_eq!(json, "\"C\"");

        // 反序列化时经过标签解析
        let label: Label = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(label, Label::C);

        let raw: Label = serde_json::from_str("\"Z\"").unwrap();
        assert_eq!(raw, Label::Unresolved("Z".to_string()));
        assert!(!raw.is_canonical());
    }
}
