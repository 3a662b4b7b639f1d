use crate::models::question::Label;
use std::collections::BTreeMap;

/// 单次扫描得到的 问题编号 → 正答 映射
pub type AnswerMap = BTreeMap<u32, Label>;

/// 正答表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerKey {
    answers: AnswerMap,
}

impl AnswerKey {
    pub fn get(&self, number: u32) -> Option<&Label> {
        self.answers.get(&number)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl From<AnswerMap> for AnswerKey {
    fn from(answers: AnswerMap) -> Self {
        Self { answers }
    }
}
