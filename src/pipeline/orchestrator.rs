//! 流水线编排器 - 按阶段顺序驱动Agent调用并维护全局状态机
//!
//! 统一两种拓扑：发现运行 ready → discovering → ready，
//! 完整内容流水线 ready → analyzing_seo → drafting → fact_checking
//! → review_required，以及遗留的单阶段草稿 ready → drafting → ready。
//! 任何阶段失败即放弃本次运行：状态回滚到ready、记录失败消息、
//! 不提交部分内容。

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::pipeline::agents::{
    ArticleDraft, ArticleWriter, DraftBrief, DraftWriter, SeoAnalyst, TrendScout, WriterBrief,
};
use crate::pipeline::autopilot;
use crate::pipeline::context::PipelineContext;
use crate::pipeline::stage_agent::StageAgent;
use crate::scoring::{QualityScorer, StubQualityScorer};
use crate::types::{Category, ContentStatus, GeneratedContent, PipelineStatus, Trend};

/// 单篇文章保留的来源快照上限
const MAX_ARTICLE_SOURCES: usize = 3;

/// 内容流水线编排器
#[derive(Clone)]
pub struct PipelineOrchestrator {
    pub context: PipelineContext,
    scorer: Arc<dyn QualityScorer>,
    autopilot_timer: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl PipelineOrchestrator {
    /// 创建新的编排器
    pub fn new(context: PipelineContext) -> Self {
        Self {
            context,
            scorer: Arc::new(StubQualityScorer),
            autopilot_timer: Arc::new(Mutex::new(None)),
        }
    }

    /// 替换质量打分器（占位打分器可换成真实模型）
    pub fn with_scorer(mut self, scorer: Arc<dyn QualityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// 发现运行：ready → discovering → ready
    ///
    /// 已有运行在途时直接拒绝且不发起任何网络调用，返回Ok(None)。
    pub async fn start_discovery(&self, category: Category) -> Result<Option<Vec<Trend>>> {
        let agent = TrendScout::default();
        if !self
            .context
            .begin_run(agent.phase(), agent.progress_message(&category))
            .await
        {
            println!("⏳ 已有流水线运行在途，跳过本次发现请求");
            return Ok(None);
        }
        self.context.set_category(category).await;
        println!("🔍 [TrendScout] 扫描 {} 类目趋势...", category);

        match agent.execute(&self.context, &category).await {
            Ok(outcome) => {
                let trends = outcome.trends.clone();
                self.context
                    .replace_trends(outcome.trends, outcome.sources)
                    .await;
                self.context
                    .finish_run(PipelineStatus::Ready, "Scan complete! Analysis finished.")
                    .await;
                println!("✅ 趋势扫描完成，共{}条", trends.len());
                Ok(Some(trends))
            }
            Err(e) => {
                self.context
                    .fail_run("Error scanning trends. Check API limits.")
                    .await;
                eprintln!("❌ 趋势扫描失败: {}", e);
                Err(e)
            }
        }
    }

    /// 完整内容流水线：ready → analyzing_seo → drafting → fact_checking → review_required
    ///
    /// 成功时提交一条status=ready的内容记录到历史头部。
    pub async fn run_full_pipeline(&self, trend: &Trend) -> Result<Option<GeneratedContent>> {
        let seo_agent = SeoAnalyst;
        let topic = trend.topic.clone();
        if !self
            .context
            .begin_run(seo_agent.phase(), seo_agent.progress_message(&topic))
            .await
        {
            println!("⏳ 已有流水线运行在途，跳过本次生成请求");
            return Ok(None);
        }

        let content = match self.drive_full_pipeline(&topic).await {
            Ok(content) => content,
            Err(e) => {
                self.context.fail_run("Failed to generate content.").await;
                eprintln!("❌ 内容流水线失败: {}", e);
                return Err(e);
            }
        };

        self.context.push_content(content.clone()).await;
        self.context
            .finish_run(
                PipelineStatus::ReviewRequired,
                format!("\"{}\" is ready for review.", content.title),
            )
            .await;
        println!("✅ 内容生成完成: {}", content.title);
        Ok(Some(content))
    }

    /// 完整流水线的阶段推进，失败由调用方统一回滚
    async fn drive_full_pipeline(&self, topic: &str) -> Result<GeneratedContent> {
        let category = self.context.category().await;

        // SEO/AEO分析阶段（begin_run已设置analyzing_seo状态）
        println!("🤖 [SeoAnalyst] 分析SEO/AEO信号...");
        let seo = SeoAnalyst.execute(&self.context, &topic.to_string()).await?;

        // 长文写作阶段，SEO关键词与问题流入写作提示词
        let writer = ArticleWriter;
        let brief = WriterBrief {
            topic: topic.to_string(),
            category,
            seo,
        };
        self.context
            .advance_phase(writer.phase(), writer.progress_message(&brief))
            .await;
        println!("🤖 [ArticleWriter] 生成长文...");
        let draft = writer.execute(&self.context, &brief).await?;

        // 事实校验检查点：可观测的阶段标记，不独立失败
        self.context
            .advance_phase(
                PipelineStatus::FactChecking,
                format!("Verifying claims for: {}...", topic),
            )
            .await;

        Ok(self
            .assemble_content(topic, category, draft, ContentStatus::Ready)
            .await)
    }

    /// 遗留的单阶段草稿路径：ready → drafting → ready
    pub async fn run_quick_draft(&self, trend: &Trend) -> Result<Option<GeneratedContent>> {
        let agent = DraftWriter;
        let category = self.context.category().await;
        let brief = DraftBrief {
            topic: trend.topic.clone(),
            category,
        };
        if !self
            .context
            .begin_run(agent.phase(), agent.progress_message(&brief))
            .await
        {
            println!("⏳ 已有流水线运行在途，跳过本次生成请求");
            return Ok(None);
        }
        println!("🤖 [DraftWriter] 快速生成草稿...");

        match agent.execute(&self.context, &brief).await {
            Ok(draft) => {
                let content = self
                    .assemble_content(&brief.topic, category, draft, ContentStatus::Draft)
                    .await;
                self.context.push_content(content.clone()).await;
                self.context
                    .finish_run(PipelineStatus::Ready, "Content generated successfully.")
                    .await;
                println!("✅ 草稿生成完成: {}", content.title);
                Ok(Some(content))
            }
            Err(e) => {
                self.context.fail_run("Failed to generate content.").await;
                eprintln!("❌ 草稿生成失败: {}", e);
                Err(e)
            }
        }
    }

    /// 将草稿装配为内容记录
    ///
    /// 来源快照优先取写作调用自身的检索来源，为空时回退到会话来源
    /// 列表，两种情况都截断到3条。
    async fn assemble_content(
        &self,
        topic: &str,
        category: Category,
        draft: ArticleDraft,
        status: ContentStatus,
    ) -> GeneratedContent {
        let mut sources = draft.sources;
        if sources.is_empty() {
            sources = self.context.sources().await;
        }
        sources.truncate(MAX_ARTICLE_SOURCES);

        let metrics = self.scorer.score(&draft.body);

        GeneratedContent {
            id: Uuid::new_v4().to_string(),
            topic: topic.to_string(),
            title: draft.title,
            summary: draft.summary,
            full_article: draft.body,
            faq: draft.faq,
            sources,
            timestamp: Utc::now(),
            category,
            status,
            metrics,
        }
    }

    /// 发布指定内容，返回是否找到对应记录
    pub async fn publish(&self, id: &str) -> Result<bool> {
        let published = self.context.publish(id).await;
        if published {
            println!("📣 内容已发布");
        } else {
            eprintln!("⚠️ 未找到要发布的内容: {}", id);
        }
        Ok(published)
    }

    /// 设置当前类目
    pub async fn set_category(&self, category: Category) {
        self.context.set_category(category).await;
    }

    /// 启停自动驾驶（幂等）
    ///
    /// 停用只取消轮询定时器，在途运行不会被中断。
    pub async fn set_autopilot(&self, enabled: bool) {
        let mut timer = self.autopilot_timer.lock().await;
        if enabled {
            self.context.set_autopilot_flag(true).await;
            if timer.is_none() {
                let interval = self.context.config.autopilot.interval_seconds;
                println!("🚁 自动驾驶已开启 (间隔{}秒)", interval);
                *timer = Some(autopilot::spawn_poll_task(self.clone(), interval));
            }
        } else {
            self.context.set_autopilot_flag(false).await;
            if let Some(handle) = timer.take() {
                handle.abort();
                println!("🛑 自动驾驶已关闭");
            }
        }
    }
}
