//! 出题单位
//!
//! 把 PDF 抽出的题目和预置题库的记录统一成同一种显示形式

use std::fmt::Display;

use crate::models::answer_key::AnswerKey;
use crate::models::pool::PoolRecord;
use crate::models::question::{Label, Question, QuestionOption};
use crate::models::round::Round;
use crate::services::label_resolver::resolve_digit;

/// 一道可出的题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    /// 标题，如 "第45回 第12問"
    pub title: String,
    pub number: u32,
    pub stem: String,
    pub options: Vec<QuestionOption>,
    /// 正答，缺失时无法判定
    pub answer: Option<Label>,
    /// 问题块原文（只有 PDF 来源才有）
    pub raw_block: Option<String>,
}

impl QuizItem {
    /// 由 PDF 抽出的题目和正答表组成
    pub fn from_question(question: Question, round: Round, answers: &AnswerKey) -> Self {
        Self {
            title: format!("{} 第{}問", round, question.number),
            number: question.number,
            answer: answers.get(question.number).cloned(),
            stem: question.stem,
            options: question.options,
            raw_block: Some(question.raw_block),
        }
    }

    /// 由题库记录组成，选项按顺序标为 A〜E
    pub fn from_pool_record(record: PoolRecord) -> Self {
        let options = record
            .options
            .into_iter()
            .enumerate()
            .map(|(i, text)| QuestionOption::new(resolve_digit(&(i + 1).to_string()), text))
            .collect();

        let part = if record.part.is_empty() {
            String::new()
        } else {
            format!(" {}", record.part)
        };

        Self {
            title: format!("第{}回{} 第{}問", record.round, part, record.number),
            number: record.number,
            stem: record.stem,
            options,
            answer: Some(resolve_digit(record.answer.trim())),
            raw_block: None,
        }
    }

    pub fn labels(&self) -> Vec<&Label> {
        self.options.iter().map(|o| &o.label).collect()
    }
}

impl Display for QuizItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        if self.stem.is_empty() {
            writeln!(f, "（设问本文抽出失败，请参照原文）")?;
        } else {
            writeln!(f, "{}", self.stem)?;
        }
        if self.options.is_empty() {
            writeln!(f, "（未能抽出选项）")?;
        } else {
            writeln!(f, "— 選択肢 —")?;
            for option in &self.options {
                writeln!(f, "{}) {}", option.label, option.text)?;
            }
        }
        Ok(())
    }
}
