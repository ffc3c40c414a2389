//! 选项排序模块 - 核心层
//!
//! 负责把"正确答案 + 干扰项"合并成展示用的选项列表。
//!
//! 关键约束：答案键的推导和界面渲染必须消费同一个排序结果，
//! 否则键值会和实际展示的选项序号悄悄错位。
//! 所以排序逻辑只存在于这一个函数，两边都从这里拿列表。

use crate::models::question::QuestionRecord;

/// 合并并排序某道题的全部选项
///
/// 排序规则：对原始存储文本按字典序排序，区分大小写。
/// 题库文本可能带 HTML 转义，解码只发生在渲染阶段，
/// 这里永远基于原始文本排序，保证键推导和展示拿到的顺序一致。
///
/// # 参数
/// - `record`: 题目记录
///
/// # 返回
/// 返回排序后的完整选项列表（干扰项 + 正确答案）
pub fn sorted_options(record: &QuestionRecord) -> Vec<String> {
    let mut combined: Vec<String> = record.incorrect_answers.clone();
    combined.push(record.correct_answer.clone());
    combined.sort();
    combined
}
