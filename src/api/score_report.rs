//! 成绩上报模块
//!
//! 负责在会话结束时把最终得分发送到外部成绩接口。
//!
//! 上报策略（刻意如此，不是遗漏）：
//! - 只发一次，不重试
//! - 带一个较短的请求超时
//! - 任何失败只记 warn 日志，绝不影响答题结果的展示
//! - 未配置接口地址时完全跳过上报

use std::time::Duration;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// 成绩上报客户端
#[derive(Debug, Clone)]
pub struct ScoreReporter {
    client: reqwest::Client,
    endpoint_url: String,
}

impl ScoreReporter {
    /// 创建上报客户端
    ///
    /// 超时在客户端层面统一设置，单次请求不会超过配置的秒数。
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.submit_timeout_secs))
            .build()
            .map_err(AppError::client_build_failed)?;

        Ok(Self {
            client,
            endpoint_url: config.score_endpoint_url.clone(),
        })
    }

    /// 是否配置了上报接口
    pub fn is_enabled(&self) -> bool {
        !self.endpoint_url.is_empty()
    }

    /// 上报得分（尽力而为）
    ///
    /// 请求体为 `{"score": <整数>}`。永远返回 ()：
    /// 成功记 info，失败记 warn，调用方不感知结果。
    ///
    /// # 参数
    /// - `score`: 最终得分
    pub async fn submit(&self, score: usize) {
        if !self.is_enabled() {
            debug!("未配置成绩接口，跳过上报");
            return;
        }

        let payload = json!({ "score": score });

        debug!("上报成绩到 {}", self.endpoint_url);

        match self
            .client
            .post(&self.endpoint_url)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                info!("✓ 成绩上报成功 (score: {})", score);
            }
            Ok(response) => {
                warn!("⚠️ 成绩接口返回异常状态: {}", response.status());
            }
            Err(e) => {
                warn!("⚠️ 成绩上报失败 (不重试): {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_disabled_without_endpoint() {
        let config = Config::default();
        let reporter = ScoreReporter::new(&config).unwrap();

        assert!(!reporter.is_enabled());
    }

    #[test]
    fn test_reporter_enabled_with_endpoint() {
        let config = Config {
            score_endpoint_url: "http://127.0.0.1:9/score".to_string(),
            ..Config::default()
        };
        let reporter = ScoreReporter::new(&config).unwrap();

        assert!(reporter.is_enabled());
    }

    /// 未配置接口时 submit 是空操作，立即返回
    #[tokio::test]
    async fn test_submit_disabled_is_noop() {
        let config = Config::default();
        let reporter = ScoreReporter::new(&config).unwrap();

        reporter.submit(2).await;
    }

    /// 上报失败不向调用方抛错
    #[tokio::test]
    async fn test_submit_failure_is_swallowed() {
        // 端口 9 (discard) 上没有服务，连接必然失败
        let config = Config {
            score_endpoint_url: "http://127.0.0.1:9/score".to_string(),
            submit_timeout_secs: 1,
            ..Config::default()
        };
        let reporter = ScoreReporter::new(&config).unwrap();

        reporter.submit(1).await;
    }
}
