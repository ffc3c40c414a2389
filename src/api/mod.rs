//! API 模块
//!
//! 负责所有与外部系统的交互

pub mod score_report;

pub use score_report::ScoreReporter;
