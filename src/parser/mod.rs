//! 响应解析器 - 将模型输出提取为类型化记录
//!
//! schema约束的路径与文本启发式的遗留路径都收敛在这里，
//! 每种提取都有确定性的兜底值，解析永远不会失败。

use std::sync::LazyLock;

use regex::Regex;

use crate::llm::client::gemini::GroundingChunk;
use crate::scoring::{self, RelevanceBand};
use crate::types::{Category, FaqEntry, GroundingSource, SeoInsights, Trend};

/// 单次发现最多保留的趋势数量
pub const MAX_TRENDS: usize = 5;
/// 多Agent流水线摘要截断长度（字符）
pub const SUMMARY_PREFIX_LEN: usize = 220;
/// 趋势行最小长度（去首尾空白后），更短的行视为噪声
const MIN_TREND_LINE_LEN: usize = 11;

static TITLE_H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").unwrap());
static TITLE_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Title:\s*(.+)").unwrap());

/// 趋势提取的评分配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendExtraction {
    pub relevance_band: RelevanceBand,
    pub assign_competition: bool,
}

impl TrendExtraction {
    /// 简化流水线：相关度80-99，不标注竞争强度
    pub const SIMPLE: TrendExtraction = TrendExtraction {
        relevance_band: RelevanceBand::SIMPLE,
        assign_competition: false,
    };
    /// 多Agent流水线：相关度75-99，随机标注竞争强度
    pub const AGENT: TrendExtraction = TrendExtraction {
        relevance_band: RelevanceBand::AGENT,
        assign_competition: true,
    };
}

/// 从模型自由文本提取趋势列表
///
/// 行级启发式：丢弃过短的行，取前5行，首个冒号左侧去掉
/// 数字/星号/句点后作为topic，右侧作为description。
pub fn extract_trends(text: &str, category: Category, options: TrendExtraction) -> Vec<Trend> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.len() >= MIN_TREND_LINE_LEN)
        .take(MAX_TRENDS)
        .map(|line| trend_from_line(line, category, options))
        .collect()
}

fn trend_from_line(line: &str, category: Category, options: TrendExtraction) -> Trend {
    let (head, tail) = match line.split_once(':') {
        Some((head, tail)) => (head, Some(tail)),
        None => (line, None),
    };

    let cleaned = head.replace(|c: char| c.is_ascii_digit() || c == '*' || c == '.', "");
    let topic = match cleaned.trim() {
        "" => format!("{} update", category),
        topic => topic.to_string(),
    };

    let description = tail
        .map(str::trim)
        .filter(|tail| !tail.is_empty())
        .map(String::from)
        .unwrap_or_else(|| format!("Trending news in {}", category));

    Trend {
        topic,
        description,
        relevance: options.relevance_band.sample(),
        competition: options.assign_competition.then(scoring::sample_competition),
        search_volume: None,
    }
}

/// 提取文章标题：markdown一级标题或`Title:`前缀行，缺失时合成默认标题
pub fn extract_title(text: &str, topic: &str) -> String {
    if let Some(caps) = TITLE_H1.captures(text) {
        return caps[1].trim().to_string();
    }
    if let Some(caps) = TITLE_PREFIX.captures(text) {
        return caps[1].trim().to_string();
    }
    format!("Deep Dive: {}", topic)
}

/// 提取摘要：取第二个空行分隔的段落，可选前缀截断
pub fn extract_summary(text: &str, max_len: Option<usize>) -> String {
    let summary = text
        .split("\n\n")
        .nth(1)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .unwrap_or("Automated summary of the latest trends.");

    match max_len {
        Some(limit) if summary.chars().count() > limit => {
            let prefix: String = summary.chars().take(limit).collect();
            format!("{}...", prefix.trim_end())
        }
        _ => summary.to_string(),
    }
}

/// 从检索元数据提取引用来源，仅保留带web资源的条目
pub fn extract_sources(chunks: &[GroundingChunk]) -> Vec<GroundingSource> {
    chunks
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .filter_map(|web| {
            let uri = web.uri.clone()?;
            let title = web
                .title
                .clone()
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| "Source".to_string());
            Some(GroundingSource { title, uri })
        })
        .collect()
}

/// 提取FAQ：匹配`**Q:**`/`**A:**`行对，不匹配时得到空列表
pub fn extract_faq(text: &str) -> Vec<FaqEntry> {
    let mut faq = Vec::new();
    let mut pending_question: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if let Some(question) = line.strip_prefix("**Q:**") {
            pending_question = Some(question.trim().to_string()).filter(|q| !q.is_empty());
        } else if let Some(answer) = line.strip_prefix("**A:**") {
            if let Some(question) = pending_question.take() {
                let answer = answer.trim();
                if !answer.is_empty() {
                    faq.push(FaqEntry {
                        question,
                        answer: answer.to_string(),
                    });
                }
            }
        }
    }

    faq
}

/// 解析schema约束的SEO/AEO响应，反序列化失败时回退为空记录
pub fn parse_seo_insights(text: &str) -> SeoInsights {
    serde_json::from_str(strip_code_fences(text)).unwrap_or_else(|e| {
        eprintln!("⚠️ SEO响应解析失败，使用空结果兜底: {}", e);
        SeoInsights::default()
    })
}

/// 统计空白分隔的词元数量
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// 去掉模型偶尔包裹的markdown代码栅栏
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|inner| inner.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

// Include tests
#[cfg(test)]
mod tests;
