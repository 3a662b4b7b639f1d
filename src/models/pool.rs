use serde::Deserialize;

/// 题库中每题固定的选项数
pub const POOL_OPTION_COUNT: usize = 5;

/// 预置题库中的一条记录
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PoolRecord {
    #[serde(deserialize_with = "deserialize_round")]
    pub round: String,
    #[serde(default)]
    pub part: String,
    pub number: u32,
    pub stem: String,
    pub options: Vec<String>,
    /// "1"〜"5"
    pub answer: String,
}

impl PoolRecord {
    /// 选项数为 5 且正答在 "1"〜"5" 之间
    pub fn is_well_formed(&self) -> bool {
        self.options.len() == POOL_OPTION_COUNT
            && matches!(self.answer.trim(), "1" | "2" | "3" | "4" | "5")
    }
}

/// 读入完成后的题库，不再修改
#[derive(Debug, Clone, Default)]
pub struct QuestionPool {
    pub records: Vec<PoolRecord>,
    /// 因格式不正确被跳过的记录数
    pub skipped: usize,
}

impl QuestionPool {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// TOML 题库文件的外层结构
///
/// 记录先保持为原始值，逐条转换，单条格式错误不影响同一文件中的其他记录
#[derive(Debug, Deserialize)]
pub struct PoolFile {
    #[serde(default)]
    pub questions: Vec<toml::Value>,
}

// round 在文件里既可能写成字符串也可能写成整数
#[derive(Deserialize)]
#[serde(untagged)]
enum RoundField {
    Text(String),
    Number(i64),
}

fn deserialize_round<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match RoundField::deserialize(deserializer)? {
        RoundField::Text(text) => text,
        RoundField::Number(n) => n.to_string(),
    })
}
