//! 会话状态存储 - 趋势、引用来源、内容历史与派生统计
//!
//! 所有状态只存活于单个会话的内存中，不做持久化。变更统一经由
//! 下面这组入口方法，运行互斥检查也在这里完成。

use serde::Serialize;

use crate::types::{
    Category, ContentStatus, GeneratedContent, GroundingSource, PipelineStatus, Trend,
};

/// 仪表盘派生统计，由内容历史纯函数推导
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub trends_detected: usize,
    pub articles_drafted: usize,
    pub published_count: usize,
    pub avg_seo_score: u32,
    pub total_word_count: usize,
}

/// 会话状态存储
#[derive(Debug)]
pub struct SessionStore {
    trends: Vec<Trend>,
    sources: Vec<GroundingSource>,
    /// 内容历史，最新在前，会话内永不删除
    history: Vec<GeneratedContent>,
    category: Category,
    autopilot_enabled: bool,
    status: PipelineStatus,
    progress_message: String,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            trends: Vec::new(),
            sources: Vec::new(),
            history: Vec::new(),
            category: Category::default(),
            autopilot_enabled: false,
            status: PipelineStatus::Ready,
            progress_message: String::new(),
        }
    }

    // ---- 运行状态机 ----

    /// 尝试进入一个新的运行阶段；已有运行在途时拒绝
    pub fn begin_run(&mut self, phase: PipelineStatus, message: impl Into<String>) -> bool {
        if self.status.is_busy() {
            return false;
        }
        self.status = phase;
        self.progress_message = message.into();
        true
    }

    /// 运行在途时切换到下一阶段
    pub fn advance_phase(&mut self, phase: PipelineStatus, message: impl Into<String>) {
        self.status = phase;
        self.progress_message = message.into();
    }

    /// 结束当前运行并记录结果状态与消息
    pub fn finish_run(&mut self, outcome: PipelineStatus, message: impl Into<String>) {
        self.status = outcome;
        self.progress_message = message.into();
    }

    /// 放弃当前运行：回滚到ready并记录失败消息
    pub fn fail_run(&mut self, message: impl Into<String>) {
        self.status = PipelineStatus::Ready;
        self.progress_message = message.into();
    }

    pub fn status(&self) -> PipelineStatus {
        self.status
    }

    pub fn progress_message(&self) -> &str {
        &self.progress_message
    }

    pub fn is_busy(&self) -> bool {
        self.status.is_busy()
    }

    // ---- 趋势与来源 ----

    /// 整体替换趋势与来源（发现运行的结果，不做合并）
    pub fn replace_trends(&mut self, trends: Vec<Trend>, sources: Vec<GroundingSource>) {
        self.trends = trends;
        self.sources = sources;
    }

    pub fn trends(&self) -> &[Trend] {
        &self.trends
    }

    pub fn sources(&self) -> &[GroundingSource] {
        &self.sources
    }

    pub fn find_trend(&self, topic: &str) -> Option<&Trend> {
        self.trends.iter().find(|trend| trend.topic == topic)
    }

    // ---- 类目与自动驾驶 ----

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot_enabled = enabled;
    }

    pub fn autopilot_enabled(&self) -> bool {
        self.autopilot_enabled
    }

    // ---- 内容历史 ----

    /// 将新内容插入历史头部（最新在前）
    pub fn push_content(&mut self, content: GeneratedContent) {
        self.history.insert(0, content);
    }

    pub fn history(&self) -> &[GeneratedContent] {
        &self.history
    }

    /// 发布指定内容：只改动该条记录的status字段
    ///
    /// 无运行在途时同步更新全局状态标记；在途运行的状态不被覆盖。
    pub fn publish(&mut self, id: &str) -> bool {
        let Some(item) = self.history.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.status = ContentStatus::Published;

        if !self.status.is_busy() {
            self.status = PipelineStatus::Published;
            self.progress_message = "Content published to site.".to_string();
        }
        true
    }

    /// 派生统计，纯函数推导
    pub fn stats(&self) -> DashboardStats {
        let published_count = self
            .history
            .iter()
            .filter(|item| item.status == ContentStatus::Published)
            .count();

        let avg_seo_score = if self.history.is_empty() {
            0
        } else {
            let total: u32 = self
                .history
                .iter()
                .map(|item| u32::from(item.metrics.seo_score))
                .sum();
            (f64::from(total) / self.history.len() as f64).round() as u32
        };

        DashboardStats {
            trends_detected: self.trends.len(),
            articles_drafted: self.history.len(),
            published_count,
            avg_seo_score,
            total_word_count: self.history.iter().map(|item| item.metrics.word_count).sum(),
        }
    }
}
