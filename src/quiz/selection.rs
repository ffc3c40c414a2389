//! 答题记录模块 - 核心层
//!
//! `SelectionList` 记录用户对每道题的选择（或未作答）。
//! 它只通过 `record_answer` 这个纯函数更新：每次返回新列表，
//! 从不原地修改输入，方便界面层做可预测的状态替换。

/// 每道题的答题记录列表
///
/// 槽位按题目序号索引，每个槽位是"已选的选项序号"或"未作答"。
/// 会话开始时为空，随作答逐步增长，只增不减。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionList(Vec<Option<usize>>);

impl SelectionList {
    /// 创建空的答题记录（会话开始时）
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// 当前记录长度（可能小于题目总数，也可能因乱序作答被补齐到更长）
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 读取某个槽位的选择，未作答或越界都返回 None
    pub fn get(&self, question_index: usize) -> Option<usize> {
        self.0.get(question_index).copied().flatten()
    }

    /// 原始槽位视图
    pub fn slots(&self) -> &[Option<usize>] {
        &self.0
    }

    /// 已作答的题目数量
    pub fn answered_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }
}

impl From<Vec<Option<usize>>> for SelectionList {
    fn from(slots: Vec<Option<usize>>) -> Self {
        Self(slots)
    }
}

/// 记录一次作答
///
/// 返回一份新的记录：除了 `question_index` 槽位被写成 `answer_index`，
/// 其余槽位与输入完全一致。输入本身不会被修改。
///
/// 越界的 `question_index` 不视为错误：列表会先用"未作答"补齐到该位置
/// （允许乱序作答、跳题）。选项序号是否在该题的选项范围内由调用方把关，
/// 这里不做校验。
///
/// # 参数
/// - `selections`: 当前答题记录
/// - `question_index`: 题目序号（0 起）
/// - `answer_index`: 选项序号（0 起，基于排序后的选项列表）
pub fn record_answer(
    selections: &SelectionList,
    question_index: usize,
    answer_index: usize,
) -> SelectionList {
    let mut slots = selections.0.clone();
    if slots.len() <= question_index {
        slots.resize(question_index + 1, None);
    }
    slots[question_index] = Some(answer_index);
    SelectionList(slots)
}

/// 判断是否全部作答完成
///
/// 当且仅当 `[0, total_questions)` 内每个槽位都已作答时返回 true。
/// 注意必须按位置逐一检查：乱序作答会留下中间空洞，
/// 即使"已答数量"等于题目总数也不能算完成，除非每个位置都真的有值。
pub fn is_complete(selections: &SelectionList, total_questions: usize) -> bool {
    (0..total_questions).all(|index| selections.get(index).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_answer_sets_target_slot() {
        let empty = SelectionList::new();
        let updated = record_answer(&empty, 0, 2);

        assert_eq!(updated.get(0), Some(2));
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn test_record_answer_keeps_other_slots() {
        let base = SelectionList::from(vec![Some(1), Some(0), Some(3)]);
        let updated = record_answer(&base, 1, 2);

        assert_eq!(updated.get(0), Some(1));
        assert_eq!(updated.get(1), Some(2));
        assert_eq!(updated.get(2), Some(3));
    }

    #[test]
    fn test_record_answer_does_not_mutate_input() {
        let base = SelectionList::from(vec![Some(1)]);
        let snapshot = base.clone();

        let _updated = record_answer(&base, 0, 0);

        assert_eq!(base, snapshot);
    }

    #[test]
    fn test_record_answer_pads_for_out_of_order_answering() {
        // 直接回答第 3 题，前面的槽位补"未作答"
        let empty = SelectionList::new();
        let updated = record_answer(&empty, 2, 1);

        assert_eq!(updated.len(), 3);
        assert_eq!(updated.slots(), &[None, None, Some(1)]);
    }

    #[test]
    fn test_record_answer_overwrites_previous_choice() {
        let base = SelectionList::from(vec![Some(0)]);
        let updated = record_answer(&base, 0, 3);

        assert_eq!(updated.get(0), Some(3));
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn test_is_complete_when_all_answered() {
        let selections = SelectionList::from(vec![Some(0), Some(1)]);
        assert!(is_complete(&selections, 2));
    }

    #[test]
    fn test_is_complete_rejects_unset_slot() {
        let selections = SelectionList::from(vec![Some(0), None]);
        assert!(!is_complete(&selections, 2));
    }

    #[test]
    fn test_is_complete_rejects_gap_even_with_enough_answers() {
        // 已答 2 题但第 0 题是空洞，不算完成
        let selections = SelectionList::from(vec![None, Some(0), Some(1)]);
        assert!(!is_complete(&selections, 3));
    }

    #[test]
    fn test_is_complete_ignores_extra_padding() {
        // 前 2 题都答了，多出来的空槽位不影响完成判断
        let selections = SelectionList::from(vec![Some(0), Some(1), None]);
        assert!(is_complete(&selections, 2));
    }

    #[test]
    fn test_answered_count() {
        let selections = SelectionList::from(vec![None, Some(0), Some(1)]);
        assert_eq!(selections.answered_count(), 2);
    }
}
