//! 占位评分模块
//!
//! 本系统目前没有接入真实的打分模型：相关度、竞争强度与内容质量评分
//! 全部是伪随机信号。所有这类信号集中在这个模块里，其它代码一律不得
//! 自行造随机数，替换真实评分时只需要改这里。

use rand::Rng;

use crate::parser;
use crate::types::{Competition, ContentMetrics};

/// 相关度采样区间（闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelevanceBand {
    pub lo: u8,
    pub hi: u8,
}

impl RelevanceBand {
    /// 简化流水线（单阶段草稿）使用的区间
    pub const SIMPLE: RelevanceBand = RelevanceBand { lo: 80, hi: 99 };
    /// 多Agent流水线使用的区间
    pub const AGENT: RelevanceBand = RelevanceBand { lo: 75, hi: 99 };

    /// 采样一个相关度值
    pub fn sample(self) -> u8 {
        rand::rng().random_range(self.lo..=self.hi)
    }

    pub fn contains(self, value: u8) -> bool {
        (self.lo..=self.hi).contains(&value)
    }
}

// TODO: 接入真实的搜索热度信号，替换随机相关度与竞争强度
/// 采样竞争强度，Low/Medium二选一
pub fn sample_competition() -> Competition {
    if rand::rng().random_bool(0.5) {
        Competition::Low
    } else {
        Competition::Medium
    }
}

/// 内容质量打分接口 - 接入真实模型时替换StubQualityScorer即可
pub trait QualityScorer: Send + Sync {
    fn score(&self, article_body: &str) -> ContentMetrics;
}

/// 占位质量打分器 - 除word_count外全部为伪随机信号
#[derive(Debug, Default, Clone)]
pub struct StubQualityScorer;

impl QualityScorer for StubQualityScorer {
    fn score(&self, article_body: &str) -> ContentMetrics {
        let mut rng = rand::rng();
        ContentMetrics {
            seo_score: rng.random_range(70..=98),
            aeo_score: rng.random_range(65..=95),
            readability: rng.random_range(60..=95),
            word_count: parser::word_count(article_body),
        }
    }
}
