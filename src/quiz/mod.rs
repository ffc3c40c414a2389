//! 核心答题逻辑 - 纯函数层
//!
//! 本模块只包含纯函数和不可变数据结构，不做任何 IO：
//! - `options` - 选项合并与排序（答案键推导和渲染共用的唯一排序入口）
//! - `selection` - 答题记录（SelectionList）的不可变更新与完成判断
//! - `score` - 答案键推导与计分

pub mod options;
pub mod score;
pub mod selection;

pub use options::sorted_options;
pub use score::{compute_score, derive_answer_key, AnswerKey};
pub use selection::{is_complete, record_answer, SelectionList};
