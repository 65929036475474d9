use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::trend::Category;

/// 检索引用来源 - 模型通过web检索回答时产生的引用
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// FAQ问答条目
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// SEO/AEO分析结果（schema约束输出）
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SeoInsights {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub questions: Vec<String>,
}

/// 内容质量指标 - 评分0-100，word_count为真实词元计数，
/// 其余评分当前来自占位打分器（见scoring模块）
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    pub seo_score: u8,
    pub aeo_score: u8,
    pub readability: u8,
    pub word_count: usize,
}

/// 内容生命周期状态
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Ready,
    Published,
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentStatus::Draft => write!(f, "draft"),
            ContentStatus::Ready => write!(f, "ready"),
            ContentStatus::Published => write!(f, "published"),
        }
    }
}

/// 生成的内容记录
///
/// 创建后除status外全部字段不可变；status由显式的发布动作推进。
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub id: String,
    pub topic: String,
    pub title: String,
    pub summary: String,
    pub full_article: String,
    pub faq: Vec<FaqEntry>,
    /// 来源快照，最多3条
    pub sources: Vec<GroundingSource>,
    pub timestamp: DateTime<Utc>,
    pub category: Category,
    pub status: ContentStatus,
    pub metrics: ContentMetrics,
}

/// 流水线全局状态 - 整个会话只有一个状态值
///
/// Discovering/AnalyzingSeo/Drafting/FactChecking为运行在途阶段，
/// ReviewRequired/Published为静止的结果标记，不阻塞新运行。
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    #[default]
    Ready,
    Discovering,
    AnalyzingSeo,
    Drafting,
    FactChecking,
    ReviewRequired,
    Published,
}

impl PipelineStatus {
    /// 是否有流水线运行在途
    pub fn is_busy(self) -> bool {
        matches!(
            self,
            PipelineStatus::Discovering
                | PipelineStatus::AnalyzingSeo
                | PipelineStatus::Drafting
                | PipelineStatus::FactChecking
        )
    }
}

impl std::fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineStatus::Ready => write!(f, "ready"),
            PipelineStatus::Discovering => write!(f, "discovering"),
            PipelineStatus::AnalyzingSeo => write!(f, "analyzing_seo"),
            PipelineStatus::Drafting => write!(f, "drafting"),
            PipelineStatus::FactChecking => write!(f, "fact_checking"),
            PipelineStatus::ReviewRequired => write!(f, "review_required"),
            PipelineStatus::Published => write!(f, "published"),
        }
    }
}
