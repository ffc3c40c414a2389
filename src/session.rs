//! 答题会话 - 流程层
//!
//! 核心职责：驱动"一场答题"的完整流程
//!
//! 流程顺序：
//! 1. 逐题展示（排序后的选项 + 当前选择）
//! 2. 作答 / 前后跳转（n / p）
//! 3. 结算（f）：全部作答 → 得分页；有遗漏 → 跳回第一道未答的题
//!
//! 会话状态（唯一的一份 SelectionList）由会话自己持有，
//! 所有读写都经过 `quiz` 模块的纯函数，不存在环境共享状态。

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::models::question::{QuestionBank, QuestionRecord};
use crate::quiz::{
    compute_score, derive_answer_key, is_complete, record_answer, sorted_options, AnswerKey,
    SelectionList,
};
use crate::render::decode_html;

/// 会话结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// 全部作答并产出最终得分
    Finished { score: usize, total: usize },
    /// 用户中途退出（不上报成绩）
    Aborted,
}

/// 单条用户指令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// 选择某个选项（内部存 0 起的序号）
    Choose(usize),
    Next,
    Prev,
    Finish,
    Quit,
}

/// 解析一行输入
///
/// 数字按界面上的 1 起序号理解，其余是单字母指令。
fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    match trimmed {
        "n" | "next" => Some(Command::Next),
        "p" | "prev" => Some(Command::Prev),
        "f" | "finish" => Some(Command::Finish),
        "q" | "quit" => Some(Command::Quit),
        _ => trimmed
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .map(Command::Choose),
    }
}

/// 答题会话
///
/// - 持有题目列表、答案键和答题记录
/// - 答案键在创建时推导一次，之后只读
/// - 不持有任何 IO 资源，`run` 只借用 stdin
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    answer_key: AnswerKey,
    selections: SelectionList,
    current: usize,
    verbose_logging: bool,
}

impl QuizSession {
    /// 从题库创建新会话（题库须非空，由应用层把关）
    pub fn new(bank: &QuestionBank, verbose_logging: bool) -> Self {
        let answer_key = derive_answer_key(&bank.results);
        Self {
            questions: bank.results.clone(),
            answer_key,
            selections: SelectionList::new(),
            current: 0,
            verbose_logging,
        }
    }

    /// 题目总数
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// 当前题目序号（0 起）
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// 是否全部作答完成
    pub fn is_complete(&self) -> bool {
        is_complete(&self.selections, self.questions.len())
    }

    /// 当前得分
    pub fn score(&self) -> usize {
        compute_score(&self.answer_key, &self.selections)
    }

    /// 第一道未作答的题
    pub fn first_unanswered(&self) -> Option<usize> {
        (0..self.questions.len()).find(|&index| self.selections.get(index).is_none())
    }

    /// 为当前题目记录一次选择
    ///
    /// 选项序号超出该题选项数量时拒绝并返回 false。
    /// 范围校验只在这一层做，核心的 `record_answer` 保持宽松。
    pub fn choose(&mut self, answer_index: usize) -> bool {
        let Some(record) = self.questions.get(self.current) else {
            return false;
        };
        let option_count = sorted_options(record).len();
        if answer_index >= option_count {
            return false;
        }

        self.selections = record_answer(&self.selections, self.current, answer_index);

        if self.verbose_logging {
            info!(
                "[题目 {}] 已选择选项 {} (已答 {}/{})",
                self.current + 1,
                answer_index + 1,
                self.selections.answered_count(),
                self.questions.len()
            );
        }

        true
    }

    /// 跳到下一题（最后一题时停留）
    pub fn advance(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    /// 跳到上一题（第一题时停留）
    pub fn retreat(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// 渲染当前题目和选项
    pub fn render_question(&self) -> String {
        let record = &self.questions[self.current];
        let chosen = self.selections.get(self.current);

        let mut out = format!(
            "\n第 {}/{} 题: {}\n",
            self.current + 1,
            self.questions.len(),
            decode_html(&record.question)
        );

        for (index, option) in sorted_options(record).iter().enumerate() {
            let marker = if chosen == Some(index) { "●" } else { "○" };
            out.push_str(&format!("  {} {}. {}\n", marker, index + 1, decode_html(option)));
        }

        out.push_str("(输入选项序号作答 | n 下一题 | p 上一题 | f 结算 | q 退出)\n");
        out
    }

    /// 渲染结算页
    ///
    /// 全部作答时显示得分，否则提示还有遗漏（两种结语不同）。
    pub fn render_finish(&self) -> String {
        let total = self.questions.len();
        if self.is_complete() {
            format!("\n🎉 答题完成！得分: {} / {}\n", self.score(), total)
        } else {
            format!(
                "\n⚠️ 还有未作答的题目 (已答 {} / {})，先把剩下的答完吧\n",
                self.selections.answered_count(),
                total
            )
        }
    }

    /// 运行交互式会话，从 stdin 逐行读取指令
    pub async fn run(&mut self) -> Result<SessionOutcome> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        println!("{}", self.render_question());

        while let Some(line) = lines.next_line().await? {
            match parse_command(&line) {
                Some(Command::Choose(answer_index)) => {
                    if self.choose(answer_index) {
                        // 作答后自动前进，最后一题停留在原地
                        self.advance();
                    } else {
                        println!("无效的选项序号: {}", line.trim());
                    }
                    println!("{}", self.render_question());
                }
                Some(Command::Next) => {
                    self.advance();
                    println!("{}", self.render_question());
                }
                Some(Command::Prev) => {
                    self.retreat();
                    println!("{}", self.render_question());
                }
                Some(Command::Finish) => {
                    println!("{}", self.render_finish());
                    if self.is_complete() {
                        return Ok(SessionOutcome::Finished {
                            score: self.score(),
                            total: self.questions.len(),
                        });
                    }
                    // 有遗漏：跳回第一道未作答的题
                    if let Some(index) = self.first_unanswered() {
                        self.current = index;
                    }
                    println!("{}", self.render_question());
                }
                Some(Command::Quit) => {
                    return Ok(SessionOutcome::Aborted);
                }
                None => {
                    println!("无法识别的输入: {}", line.trim());
                }
            }
        }

        // stdin 关闭视为退出
        Ok(SessionOutcome::Aborted)
    }
}
