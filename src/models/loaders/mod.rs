//! 题库加载器
//!
//! 支持 JSON（data.json，Open Trivia 形状）和 TOML 两种题库文件，
//! 按扩展名分发，未知扩展名按 JSON 处理。

pub mod json_loader;
pub mod toml_loader;

use std::path::Path;

use crate::error::AppResult;
use crate::models::question::QuestionBank;

pub use json_loader::load_json_bank;
pub use toml_loader::load_toml_bank;

/// 按扩展名加载题库文件
pub async fn load_bank(path: &Path) -> AppResult<QuestionBank> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => load_toml_bank(path).await,
        _ => load_json_bank(path).await,
    }
}
