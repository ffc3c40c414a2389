//! 应用编排层
//!
//! 负责把各层组装起来：加载配置和题库、创建会话、
//! 结束后输出统计并触发一次尽力而为的成绩上报。

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::api::ScoreReporter;
use crate::config::Config;
use crate::error::AppError;
use crate::models::load_bank;
use crate::models::question::QuestionBank;
use crate::session::{QuizSession, SessionOutcome};
use crate::utils::logging;

/// 应用主结构
pub struct App {
    config: Config,
    bank: QuestionBank,
    reporter: ScoreReporter,
}

impl App {
    /// 初始化应用
    ///
    /// 加载题库并构建上报客户端。题库为空视为配置错误，直接失败。
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);

        let bank = load_bank(Path::new(&config.data_file)).await?;
        if bank.results.is_empty() {
            return Err(AppError::bank_empty(config.data_file.as_str()).into());
        }
        logging::log_bank_loaded(&bank);

        let reporter = ScoreReporter::new(&config)?;

        Ok(Self {
            config,
            bank,
            reporter,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        let mut session = QuizSession::new(&self.bank, self.config.verbose_logging);

        match session.run().await? {
            SessionOutcome::Finished { score, total } => {
                logging::log_final_score(score, total);
                // 尽力而为：单次尝试，结果只进日志
                self.reporter.submit(score).await;
            }
            SessionOutcome::Aborted => {
                info!("👋 会话提前结束，不上报成绩");
            }
        }

        Ok(())
    }
}
