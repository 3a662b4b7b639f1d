pub mod answer_key;
pub mod loaders;
pub mod pool;
pub mod question;
pub mod round;

pub use answer_key::{AnswerKey, AnswerMap};
pub use loaders::{load_pool, load_pool_file};
pub use pool::{PoolRecord, QuestionPool};
pub use question::{Label, Question, QuestionOption};
pub use round::Round;
