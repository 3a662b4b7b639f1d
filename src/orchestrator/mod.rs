//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (读入文档 / 题库，出一题)
//!     ↓
//! workflow::QuizDeck (过滤、抽题、判定)
//!     ↓
//! services (能力层：规范化 / 切分 / 选项 / 正答 / 回数)
//!     ↓
//! infrastructure (基础设施：PdfTextExtractor)
//! ```
//!
//! 本层只做调度和统计，不做具体的文本解析

pub mod app;

pub use app::{build_pdf_deck, App};
