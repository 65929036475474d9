use crate::llm::client::{AgentReply, AgentRequest, ModelTier};
use crate::parser;
use crate::pipeline::stage_agent::StageAgent;
use crate::types::{Category, FaqEntry, GroundingSource, PipelineStatus, SeoInsights};

/// 写作任务说明
#[derive(Debug, Clone)]
pub struct WriterBrief {
    pub topic: String,
    pub category: Category,
    pub seo: SeoInsights,
}

/// 解析后的文章草稿
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub faq: Vec<FaqEntry>,
    pub sources: Vec<GroundingSource>,
}

/// 长文写作Agent - 基于SEO分析产出完整的markdown文章
#[derive(Default)]
pub struct ArticleWriter;

impl StageAgent for ArticleWriter {
    type Input = WriterBrief;
    type Output = ArticleDraft;

    fn agent_type(&self) -> &'static str {
        "ArticleWriter"
    }

    fn phase(&self) -> PipelineStatus {
        PipelineStatus::Drafting
    }

    fn progress_message(&self, brief: &WriterBrief) -> String {
        format!("Generating autonomous content for: {}...", brief.topic)
    }

    fn build_request(&self, brief: &WriterBrief) -> AgentRequest {
        let mut user_prompt = format!(
            "Write a high-quality, SEO-optimized blog article about \"{}\" in the context of {}.\n\
             Start with a level-1 markdown heading as the title, follow it with a 2-sentence \
             summary paragraph, then the full article content.\n\
             The tone should be professional yet accessible.\n\
             Use markdown for formatting.\n",
            brief.topic, brief.category
        );
        if !brief.seo.keywords.is_empty() {
            user_prompt.push_str(&format!(
                "Weave in these keywords where natural: {}.\n",
                brief.seo.keywords.join(", ")
            ));
        }
        if !brief.seo.questions.is_empty() {
            user_prompt.push_str(&format!(
                "Close with a `## FAQ` section answering these questions, each pair on \
                 `**Q:** ...` and `**A:** ...` lines: {}\n",
                brief.seo.questions.join(" / ")
            ));
        }

        AgentRequest {
            system_prompt: "You are a senior content writer for an autonomous publishing \
                            studio. You write well-structured, publish-ready articles \
                            grounded in current web sources."
                .to_string(),
            user_prompt,
            model_tier: ModelTier::Powerful,
            use_search: true,
            response_schema: None,
        }
    }

    fn parse_reply(&self, brief: &WriterBrief, reply: AgentReply) -> ArticleDraft {
        ArticleDraft {
            title: parser::extract_title(&reply.text, &brief.topic),
            summary: parser::extract_summary(&reply.text, Some(parser::SUMMARY_PREFIX_LEN)),
            faq: parser::extract_faq(&reply.text),
            sources: parser::extract_sources(&reply.grounding),
            body: reply.text,
        }
    }
}
