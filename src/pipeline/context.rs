use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::llm::client::LLMClient;
use crate::store::{DashboardStats, SessionStore};
use crate::types::{Category, GeneratedContent, GroundingSource, PipelineStatus, Trend};

/// 流水线上下文
#[derive(Clone)]
pub struct PipelineContext {
    /// LLM调用器，用于与模型服务通信
    pub llm_client: LLMClient,
    /// 配置
    pub config: Config,
    /// 会话状态存储
    pub store: Arc<RwLock<SessionStore>>,
}

impl PipelineContext {
    /// 创建新的流水线上下文
    pub fn new(config: Config) -> Result<Self> {
        let llm_client = LLMClient::new(config.clone())?;
        let store = Arc::new(RwLock::new(SessionStore::new()));

        Ok(Self {
            llm_client,
            config,
            store,
        })
    }

    /// 尝试进入新的运行阶段；已有运行在途时返回false
    pub async fn begin_run(&self, phase: PipelineStatus, message: impl Into<String>) -> bool {
        self.store.write().await.begin_run(phase, message)
    }

    /// 运行在途时切换到下一阶段
    pub async fn advance_phase(&self, phase: PipelineStatus, message: impl Into<String>) {
        self.store.write().await.advance_phase(phase, message);
    }

    /// 结束当前运行
    pub async fn finish_run(&self, outcome: PipelineStatus, message: impl Into<String>) {
        self.store.write().await.finish_run(outcome, message);
    }

    /// 放弃当前运行并回滚到ready
    pub async fn fail_run(&self, message: impl Into<String>) {
        self.store.write().await.fail_run(message);
    }

    pub async fn status(&self) -> PipelineStatus {
        self.store.read().await.status()
    }

    pub async fn progress_message(&self) -> String {
        self.store.read().await.progress_message().to_string()
    }

    pub async fn is_busy(&self) -> bool {
        self.store.read().await.is_busy()
    }

    /// 整体替换趋势与来源
    pub async fn replace_trends(&self, trends: Vec<Trend>, sources: Vec<GroundingSource>) {
        self.store.write().await.replace_trends(trends, sources);
    }

    pub async fn trends(&self) -> Vec<Trend> {
        self.store.read().await.trends().to_vec()
    }

    pub async fn sources(&self) -> Vec<GroundingSource> {
        self.store.read().await.sources().to_vec()
    }

    pub async fn find_trend(&self, topic: &str) -> Option<Trend> {
        self.store.read().await.find_trend(topic).cloned()
    }

    pub async fn set_category(&self, category: Category) {
        self.store.write().await.set_category(category);
    }

    pub async fn category(&self) -> Category {
        self.store.read().await.category()
    }

    pub async fn set_autopilot_flag(&self, enabled: bool) {
        self.store.write().await.set_autopilot(enabled);
    }

    pub async fn autopilot_enabled(&self) -> bool {
        self.store.read().await.autopilot_enabled()
    }

    /// 将新内容插入历史头部
    pub async fn push_content(&self, content: GeneratedContent) {
        self.store.write().await.push_content(content);
    }

    pub async fn history(&self) -> Vec<GeneratedContent> {
        self.store.read().await.history().to_vec()
    }

    /// 发布指定内容
    pub async fn publish(&self, id: &str) -> bool {
        self.store.write().await.publish(id)
    }

    /// 仪表盘派生统计
    pub async fn stats(&self) -> DashboardStats {
        self.store.read().await.stats()
    }
}
