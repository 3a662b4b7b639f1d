//! # ME2 Quiz
//!
//! 从 ME2種（第2種ME技術実力検定試験）的问题 PDF / 正答 PDF 中抽出题目和正答，
//! 随机出一题并判定正误。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - PDF 解码，只暴露"按页取文本"能力
//!
//! ### ② 业务能力层（Services）
//! - `normalizer` - NFKC 规范化、全角空格处理
//! - `label_resolver` - 各种选项记号 → A〜E
//! - `question_segmenter` - 按题头切分问题块
//! - `option_extractor` - 分离设问本文和选项
//! - `answer_key_extractor` - 三种写法的正答表扫描与合并
//! - `round_detector` - 检测 "第N回"
//!
//! ### ③ 流程层（Workflow）
//! - `QuizItem` / `QuizDeck` - 过滤、随机抽题、判定
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 读入文档或题库，出一题
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{PageTexts, PdfTextExtractor};
pub use models::{AnswerKey, Label, Question, QuestionOption, QuestionPool, Round};
pub use orchestrator::App;
pub use services::{
    detect_round, parse_answers_from_document, parse_answers_from_tail, parse_questions,
};
pub use workflow::{QuizDeck, QuizItem, Verdict};
