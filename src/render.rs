//! 文本渲染辅助
//!
//! 题库文本是 HTML 转义过的（Open Trivia 风格：`&quot;`、`&#039;`、
//! 偶尔混有标签），终端展示前需要解码。
//! 注意：排序和答案键推导永远基于原始文本，解码只在展示这一步发生。

use regex::Regex;

/// Open Trivia 数据里常见的命名实体，展示用这几个就够了。
/// `&amp;` 必须放在最后替换，避免二次解码。
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&ldquo;", "\u{201C}"),
    ("&rdquo;", "\u{201D}"),
    ("&lsquo;", "\u{2018}"),
    ("&rsquo;", "\u{2019}"),
    ("&hellip;", "\u{2026}"),
    ("&eacute;", "é"),
    ("&ouml;", "ö"),
    ("&uuml;", "ü"),
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
];

/// 解码 HTML 实体并去掉标签，得到适合终端展示的纯文本
///
/// # 参数
/// - `text`: 题库里的原始文本
///
/// # 返回
/// 返回解码后的展示文本
pub fn decode_html(text: &str) -> String {
    let mut out = text.to_string();

    // 先去标签（题干里偶尔混有 <b> / <i> 之类）
    if let Ok(tag_re) = Regex::new(r"<[^>]+>") {
        out = tag_re.replace_all(&out, "").into_owned();
    }

    // 数字实体：&#39; / &#039; 这类
    if let Ok(num_re) = Regex::new(r"&#(\d+);") {
        out = num_re
            .replace_all(&out, |caps: &regex::Captures| {
                caps[1]
                    .parse::<u32>()
                    .ok()
                    .and_then(char::from_u32)
                    .map(String::from)
                    .unwrap_or_default()
            })
            .into_owned();
    }

    for (entity, replacement) in NAMED_ENTITIES {
        if out.contains(entity) {
            out = out.replace(entity, replacement);
        }
    }

    out
}
