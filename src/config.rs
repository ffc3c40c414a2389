/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 题库数据文件路径（.json 或 .toml）
    pub data_file: String,
    /// 成绩上报接口地址（留空则禁用上报）
    pub score_endpoint_url: String,
    /// 上报请求超时（秒）
    pub submit_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: "data.json".to_string(),
            score_endpoint_url: String::new(),
            submit_timeout_secs: 5,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            data_file: std::env::var("QUIZ_DATA_FILE").unwrap_or(default.data_file),
            score_endpoint_url: std::env::var("SCORE_ENDPOINT_URL").unwrap_or(default.score_endpoint_url),
            submit_timeout_secs: std::env::var("SUBMIT_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.submit_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
