//! 启动内容流水线工作流：一次性运行或自动驾驶循环

use anyhow::Result;

use crate::config::Config;
use crate::pipeline::context::PipelineContext;
use crate::pipeline::orchestrator::PipelineOrchestrator;
use crate::scoring::RelevanceBand;
use crate::store::DashboardStats;
use crate::types::{GeneratedContent, GroundingSource, Trend};

/// 启动内容流水线工作流
pub async fn launch(config: &Config) -> Result<()> {
    let context = PipelineContext::new(config.clone())?;

    // 启动时检查模型连接
    context.llm_client.check_connection().await?;

    let orchestrator = PipelineOrchestrator::new(context);

    if config.autopilot.enabled {
        return run_autopilot(orchestrator).await;
    }

    run_once(&orchestrator).await
}

/// 一次性运行：发现 →（可选）生成 →（可选）发布
async fn run_once(orchestrator: &PipelineOrchestrator) -> Result<()> {
    let config = orchestrator.context.config.clone();

    let trends = orchestrator
        .start_discovery(config.category)
        .await?
        .unwrap_or_default();
    print_trends(&trends, &orchestrator.context.sources().await);

    if let Some(topic) = config.topic.as_deref() {
        // 优先匹配发现结果里的趋势，找不到就按给定话题临时构造一条
        let trend = match orchestrator.context.find_trend(topic).await {
            Some(trend) => trend,
            None => Trend {
                topic: topic.to_string(),
                description: format!("Trending news in {}", config.category),
                relevance: RelevanceBand::SIMPLE.sample(),
                competition: None,
                search_volume: None,
            },
        };

        let content = if config.quick_draft {
            orchestrator.run_quick_draft(&trend).await?
        } else {
            orchestrator.run_full_pipeline(&trend).await?
        };

        if let Some(content) = content {
            print_content(&content);
            if config.auto_publish {
                orchestrator.publish(&content.id).await?;
            }
        }
    }

    print_dashboard(&orchestrator.context.stats().await);
    Ok(())
}

/// 自动驾驶循环，Ctrl+C退出
async fn run_autopilot(orchestrator: PipelineOrchestrator) -> Result<()> {
    orchestrator.set_autopilot(true).await;
    println!("🚁 自动驾驶模式运行中，按Ctrl+C退出");
    tokio::signal::ctrl_c().await?;
    orchestrator.set_autopilot(false).await;
    print_dashboard(&orchestrator.context.stats().await);
    Ok(())
}

fn print_trends(trends: &[Trend], sources: &[GroundingSource]) {
    if trends.is_empty() {
        println!("📭 未发现趋势话题");
        return;
    }
    println!("📈 热门话题:");
    for (index, trend) in trends.iter().enumerate() {
        println!(
            "   {}. {} ({}%) - {}",
            index + 1,
            trend.topic,
            trend.relevance,
            trend.description
        );
    }
    if !sources.is_empty() {
        println!("🔗 检索来源:");
        for source in sources {
            println!("   - {} ({})", source.title, source.uri);
        }
    }
}

fn print_content(content: &GeneratedContent) {
    println!("📝 {}", content.title);
    println!("   {}", content.summary);
    println!(
        "   {}词 | SEO {} | AEO {} | 可读性 {} | 来源{}条 | FAQ{}条",
        content.metrics.word_count,
        content.metrics.seo_score,
        content.metrics.aeo_score,
        content.metrics.readability,
        content.sources.len(),
        content.faq.len()
    );
}

fn print_dashboard(stats: &DashboardStats) {
    println!(
        "📊 本次会话: 已起草{}篇 | 已发布{}篇 | 平均SEO {} | 总词数{}",
        stats.articles_drafted, stats.published_count, stats.avg_seo_score, stats.total_word_count
    );
}
