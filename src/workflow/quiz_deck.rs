//! 出题流程
//!
//! 过滤 → 随机抽题 → 判定

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use tracing::{debug, info};

use crate::error::QuizError;
use crate::models::question::Label;
use crate::workflow::quiz_item::QuizItem;

/// 无论如何都要满足的最少选项数
pub const MIN_SELECTABLE_OPTIONS: usize = 2;

/// 判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// 正解
    Correct { answer: Label },
    /// 不正解
    Incorrect { chosen: Label, answer: Label },
    /// 未选择，只公布正答
    Unanswered { answer: Label },
    /// 有正答表，但没有这道题的正答
    AnswerMissing,
    /// 完全没有正答表，无法判定
    KeyUnavailable,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct { answer } => write!(f, "正解！ 正答：{}", answer),
            Verdict::Incorrect { chosen, answer } => {
                write!(f, "不正解。你的解答：{} / 正答：{}", chosen, answer)
            }
            Verdict::Unanswered { answer } => write!(f, "正答是 {}（未选择解答）", answer),
            Verdict::AnswerMissing => write!(f, "没有找到这道题的正答，请确认正答 PDF"),
            Verdict::KeyUnavailable => write!(f, "没有抽出正答，无法判定。建议上传正答 PDF"),
        }
    }
}

/// 判定一道题的解答
///
/// - `key_available`: 是否抽出了任何正答
/// - `choice`: 用户的选择，`None` 表示未选择
pub fn judge(item: &QuizItem, key_available: bool, choice: Option<&Label>) -> Verdict {
    if !key_available {
        return Verdict::KeyUnavailable;
    }
    let Some(answer) = item.answer.clone() else {
        return Verdict::AnswerMissing;
    };
    match choice {
        None => Verdict::Unanswered { answer },
        Some(chosen) if *chosen == answer => Verdict::Correct { answer },
        Some(chosen) => Verdict::Incorrect {
            chosen: chosen.clone(),
            answer,
        },
    }
}

/// 可出的题目集合
#[derive(Debug, Clone)]
pub struct QuizDeck {
    items: Vec<QuizItem>,
    key_available: bool,
}

impl QuizDeck {
    pub fn new(items: Vec<QuizItem>, key_available: bool) -> Self {
        Self {
            items,
            key_available,
        }
    }

    /// 去掉选项不足的题目
    ///
    /// `min_options` 小于 2 时按 2 处理；过滤后为空时报错
    pub fn filter(self, min_options: usize) -> Result<Self, QuizError> {
        let min_options = min_options.max(MIN_SELECTABLE_OPTIONS);
        let total = self.items.len();
        let items: Vec<QuizItem> = self
            .items
            .into_iter()
            .filter(|item| item.options.len() >= min_options)
            .collect();

        info!("可出题: {}/{} (选项数 >= {})", items.len(), total, min_options);

        if items.is_empty() {
            return Err(QuizError::NoSelectableQuestion { total, min_options });
        }

        Ok(Self {
            items,
            key_available: self.key_available,
        })
    }

    /// 随机抽一题；`seed` 为 0 时不固定随机数
    pub fn pick(&self, seed: u64) -> Option<&QuizItem> {
        let mut rng = if seed == 0 {
            StdRng::from_entropy()
        } else {
            StdRng::seed_from_u64(seed)
        };
        let picked = self.items.choose(&mut rng);
        if let Some(item) = picked {
            debug!("抽到: {}", item.title);
        }
        picked
    }

    pub fn judge(&self, item: &QuizItem, choice: Option<&Label>) -> Verdict {
        judge(item, self.key_available, choice)
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn key_available(&self) -> bool {
        self.key_available
    }
}
