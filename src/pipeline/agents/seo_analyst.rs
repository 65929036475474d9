use crate::llm::client::{AgentReply, AgentRequest, ModelTier};
use crate::parser;
use crate::pipeline::stage_agent::StageAgent;
use crate::types::{PipelineStatus, SeoInsights};

/// SEO/AEO分析Agent - 产出schema约束的关键词与问题列表
///
/// 响应反序列化失败时降级为空的SeoInsights，不中止流水线。
#[derive(Default)]
pub struct SeoAnalyst;

impl SeoAnalyst {
    /// Generative Language API接受的OpenAPI子集schema
    fn response_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "OBJECT",
            "properties": {
                "keywords": { "type": "ARRAY", "items": { "type": "STRING" } },
                "questions": { "type": "ARRAY", "items": { "type": "STRING" } }
            },
            "required": ["keywords", "questions"]
        })
    }
}

impl StageAgent for SeoAnalyst {
    type Input = String;
    type Output = SeoInsights;

    fn agent_type(&self) -> &'static str {
        "SeoAnalyst"
    }

    fn phase(&self) -> PipelineStatus {
        PipelineStatus::AnalyzingSeo
    }

    fn progress_message(&self, topic: &String) -> String {
        format!("Analyzing SEO & AEO signals for: {}...", topic)
    }

    fn build_request(&self, topic: &String) -> AgentRequest {
        AgentRequest {
            system_prompt: "You are an SEO and AEO strategist. You identify the search \
                            keywords and the natural-language questions real users ask \
                            answer engines about a topic."
                .to_string(),
            user_prompt: format!(
                "For the topic \"{}\", extract the 8 most valuable SEO keywords and the 5 \
                 questions users most frequently ask about it. Return JSON with `keywords` \
                 and `questions` string arrays.",
                topic
            ),
            model_tier: ModelTier::Efficient,
            use_search: false,
            response_schema: Some(Self::response_schema()),
        }
    }

    fn parse_reply(&self, _topic: &String, reply: AgentReply) -> SeoInsights {
        parser::parse_seo_insights(&reply.text)
    }
}
