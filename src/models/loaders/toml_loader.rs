use std::path::Path;

use tokio::fs;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::question::QuestionBank;

/// 从 TOML 文件加载题库并转换为 QuestionBank 对象
///
/// TOML 形状和 JSON 等价：
///
/// ```toml
/// [[results]]
/// question = "..."
/// correct_answer = "..."
/// incorrect_answers = ["...", "..."]
/// ```
pub async fn load_toml_bank(path: &Path) -> AppResult<QuestionBank> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let bank: QuestionBank = toml::from_str(&content)
        .map_err(|e| AppError::toml_parse_failed(path.display().to_string(), e))?;

    info!(
        "正在加载: {}，共 {} 道题目",
        path.file_name().unwrap_or_default().to_string_lossy(),
        bank.results.len()
    );

    Ok(bank.with_file_path(path.to_string_lossy().to_string()))
}
