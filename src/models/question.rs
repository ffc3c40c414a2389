use serde::{Deserialize, Serialize};

/// 单道题目记录
///
/// 对应题库文件里的一条数据：题干、一个正确答案、若干干扰项。
/// 文本可能带 HTML 转义（Open Trivia 风格），这里原样保存。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
}

impl Default for QuestionRecord {
    fn default() -> Self {
        Self {
            question: String::new(),
            correct_answer: String::new(),
            incorrect_answers: Vec::new(),
        }
    }
}

/// 题库文件顶层结构
///
/// 和 Open Trivia 接口返回的 data.json 形状一致：`{ "results": [...] }`。
/// 启动时加载一次，之后只读。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<u64>,
    pub results: Vec<QuestionRecord>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl QuestionBank {
    /// 题目总数
    pub fn total_questions(&self) -> usize {
        self.results.len()
    }

    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }
}
