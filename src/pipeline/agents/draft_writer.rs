use crate::llm::client::{AgentReply, AgentRequest, ModelTier};
use crate::parser;
use crate::pipeline::agents::article_writer::ArticleDraft;
use crate::pipeline::stage_agent::StageAgent;
use crate::types::{Category, PipelineStatus};

/// 快速草稿任务说明
#[derive(Debug, Clone)]
pub struct DraftBrief {
    pub topic: String,
    pub category: Category,
}

/// 单阶段草稿Agent - 跳过SEO分析的快速生成路径（简化流水线遗留）
#[derive(Default)]
pub struct DraftWriter;

impl StageAgent for DraftWriter {
    type Input = DraftBrief;
    type Output = ArticleDraft;

    fn agent_type(&self) -> &'static str {
        "DraftWriter"
    }

    fn phase(&self) -> PipelineStatus {
        PipelineStatus::Drafting
    }

    fn progress_message(&self, brief: &DraftBrief) -> String {
        format!("Generating autonomous content for: {}...", brief.topic)
    }

    fn build_request(&self, brief: &DraftBrief) -> AgentRequest {
        AgentRequest {
            system_prompt: "You are a senior content writer for an autonomous publishing \
                            studio. You write well-structured, publish-ready articles \
                            grounded in current web sources."
                .to_string(),
            user_prompt: format!(
                "Write a high-quality, SEO-optimized blog article about \"{}\" in the \
                 context of {}.\n\
                 Include an engaging title, a 2-sentence summary, and the full article \
                 content.\n\
                 The tone should be professional yet accessible.\n\
                 Use markdown for formatting.",
                brief.topic, brief.category
            ),
            model_tier: ModelTier::Powerful,
            use_search: true,
            response_schema: None,
        }
    }

    fn parse_reply(&self, brief: &DraftBrief, reply: AgentReply) -> ArticleDraft {
        ArticleDraft {
            title: parser::extract_title(&reply.text, &brief.topic),
            // 简化路径取原始第二段，不做前缀截断
            summary: parser::extract_summary(&reply.text, None),
            faq: parser::extract_faq(&reply.text),
            sources: parser::extract_sources(&reply.grounding),
            body: reply.text,
        }
    }
}
