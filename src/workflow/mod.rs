//! 流程层
//!
//! 选出可出的题、随机抽一题、判定正误

pub mod quiz_deck;
pub mod quiz_item;

pub use quiz_deck::{judge, QuizDeck, Verdict};
pub use quiz_item::QuizItem;
