use std::fmt;

/// 考试的实施回数（第N回），只用于显示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    Known(u32),
    Unknown,
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Round::Known(n) => write!(f, "第{}回", n),
            Round::Unknown => write!(f, "第不明回"),
        }
    }
}
