//! # Quiz Answer Submit
//!
//! 一个终端问答应用：渲染固定的选择题列表，记录用户选择，
//! 按答案键计分，并在结束时尽力上报最终得分
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 核心层（Quiz）
//! - `quiz/` - 纯函数，不做 IO
//! - `sorted_options` - 选项合并与排序（答案键推导和渲染的唯一排序入口）
//! - `record_answer` / `is_complete` - 答题记录的不可变更新与完成判断
//! - `derive_answer_key` / `compute_score` - 答案键推导与计分
//!
//! ### ② 数据层（Models）
//! - `models/` - 题库数据结构与加载器（JSON / TOML）
//!
//! ### ③ 外部接口层（Api）
//! - `api/score_report` - 成绩上报客户端（单次尝试、不重试、失败只进日志）
//!
//! ### ④ 流程层（Session）
//! - `session` - 一场答题的交互流程（展示、作答、跳转、结算）
//!
//! ### ⑤ 编排层（App）
//! - `app` - 组装配置、题库、会话和上报
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod quiz;
pub mod render;
pub mod session;
pub mod utils;

// 重新导出常用类型
pub use api::ScoreReporter;
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{load_bank, QuestionBank, QuestionRecord};
pub use quiz::{
    compute_score, derive_answer_key, is_complete, record_answer, sorted_options, AnswerKey,
    SelectionList,
};
pub use render::decode_html;
pub use session::{QuizSession, SessionOutcome};
