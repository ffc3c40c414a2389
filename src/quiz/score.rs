//! 计分模块 - 核心层
//!
//! 答案键（`AnswerKey`）在启动时从题库推导一次，之后只读。
//! 计分是对答题记录和答案键的逐位精确比较，未作答永远不得分。

use tracing::debug;

use crate::models::question::QuestionRecord;
use crate::quiz::options::sorted_options;
use crate::quiz::selection::SelectionList;

/// 答案键：每道题正确选项在排序后列表中的位置
///
/// 推导和渲染共用 `sorted_options`，所以这里的序号
/// 和界面上展示的选项序号天然一致。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKey(Vec<usize>);

impl AnswerKey {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for AnswerKey {
    fn from(key: Vec<usize>) -> Self {
        Self(key)
    }
}

/// 从题库推导答案键
///
/// 对每道题执行和渲染完全相同的 `sorted_options`，
/// 然后定位正确答案在排序结果中的位置。
/// 正确答案是合并列表的一部分，一定能找到；这里的 0 回退只是形式上的。
pub fn derive_answer_key(records: &[QuestionRecord]) -> AnswerKey {
    let key: Vec<usize> = records
        .iter()
        .map(|record| {
            let options = sorted_options(record);
            options
                .iter()
                .position(|option| option == &record.correct_answer)
                .unwrap_or(0)
        })
        .collect();

    debug!("答案键推导完成，共 {} 道题", key.len());

    AnswerKey(key)
}

/// 计算得分
///
/// 统计 `[0, min(键长, 记录长))` 内"已作答且等于答案键"的位置数量。
/// 未作答的槽位永远不算命中；记录比键短时缺失位置记 0 分；
/// 记录因乱序作答比键长时，超出部分直接忽略。
/// 纯函数，同样的输入永远得到同样的结果。
pub fn compute_score(answer_key: &AnswerKey, selections: &SelectionList) -> usize {
    answer_key
        .as_slice()
        .iter()
        .enumerate()
        .filter(|(index, correct)| selections.get(*index) == Some(**correct))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::selection::record_answer;

    fn make_record(correct: &str, incorrect: &[&str]) -> QuestionRecord {
        QuestionRecord {
            question: "测试题干".to_string(),
            correct_answer: correct.to_string(),
            incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_compute_score_empty_selections() {
        let key = AnswerKey::from(vec![1, 0]);
        let selections = SelectionList::new();

        assert_eq!(compute_score(&key, &selections), 0);
    }

    #[test]
    fn test_compute_score_all_correct() {
        let key = AnswerKey::from(vec![1, 0]);
        let selections = SelectionList::from(vec![Some(1), Some(0)]);

        assert_eq!(compute_score(&key, &selections), 2);
    }

    #[test]
    fn test_compute_score_partial_match() {
        let key = AnswerKey::from(vec![1, 0]);
        let selections = SelectionList::from(vec![Some(0), Some(0)]);

        assert_eq!(compute_score(&key, &selections), 1);
    }

    #[test]
    fn test_compute_score_unset_slot_never_matches() {
        let key = AnswerKey::from(vec![1, 0]);
        let selections = SelectionList::from(vec![None, Some(0)]);

        assert_eq!(compute_score(&key, &selections), 1);
    }

    #[test]
    fn test_compute_score_ignores_extra_selections() {
        // 乱序作答补出来的多余槽位不参与计分
        let key = AnswerKey::from(vec![1, 0]);
        let selections = SelectionList::from(vec![Some(1), Some(0), Some(3)]);

        assert_eq!(compute_score(&key, &selections), 2);
    }

    #[test]
    fn test_compute_score_is_idempotent() {
        let key = AnswerKey::from(vec![1, 0]);
        let selections = SelectionList::from(vec![Some(1), None]);

        let first = compute_score(&key, &selections);
        let second = compute_score(&key, &selections);

        assert_eq!(first, second);
    }

    #[test]
    fn test_derive_answer_key_matches_sorted_position() {
        // 答案故意不按字母序给出，验证键推导跟随排序结果
        let records = vec![
            make_record("Zebra", &["Apple", "Mango"]),
            make_record("Apple", &["Zebra", "Mango"]),
        ];

        let key = derive_answer_key(&records);

        // 排序后: [Apple, Mango, Zebra] / [Apple, Mango, Zebra]
        assert_eq!(key.as_slice(), &[2, 0]);
    }

    #[test]
    fn test_derive_answer_key_agrees_with_display_order() {
        // 回归：键值必须等于正确答案在展示列表里的位置
        let record = make_record("Blue", &["Amber", "Crimson"]);
        let key = derive_answer_key(std::slice::from_ref(&record));

        let displayed = sorted_options(&record);
        assert_eq!(displayed[key.as_slice()[0]], record.correct_answer);
    }

    #[test]
    fn test_end_to_end_record_then_score() {
        let records = vec![
            make_record("Blue", &["Amber", "Crimson"]),
            make_record("Athens", &["Berlin", "Cairo"]),
        ];
        let key = derive_answer_key(&records);
        assert_eq!(key.as_slice(), &[1, 0]);

        let mut selections = SelectionList::new();
        selections = record_answer(&selections, 0, 1);
        selections = record_answer(&selections, 1, 0);

        assert_eq!(compute_score(&key, &selections), 2);
    }
}
