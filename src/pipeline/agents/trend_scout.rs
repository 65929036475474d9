use crate::llm::client::{AgentReply, AgentRequest, ModelTier};
use crate::parser::{self, TrendExtraction};
use crate::pipeline::stage_agent::StageAgent;
use crate::types::{Category, GroundingSource, PipelineStatus, Trend};

/// 发现运行的结果：趋势列表 + 检索来源
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOutcome {
    pub trends: Vec<Trend>,
    pub sources: Vec<GroundingSource>,
}

/// 趋势发现Agent - 检索指定类目下的热门话题
pub struct TrendScout {
    profile: TrendExtraction,
}

impl Default for TrendScout {
    fn default() -> Self {
        Self {
            profile: TrendExtraction::SIMPLE,
        }
    }
}

impl TrendScout {
    /// 指定趋势提取配置（多Agent流水线用TrendExtraction::AGENT）
    pub fn with_profile(profile: TrendExtraction) -> Self {
        Self { profile }
    }
}

impl StageAgent for TrendScout {
    type Input = Category;
    type Output = DiscoveryOutcome;

    fn agent_type(&self) -> &'static str {
        "TrendScout"
    }

    fn phase(&self) -> PipelineStatus {
        PipelineStatus::Discovering
    }

    fn progress_message(&self, _input: &Category) -> String {
        "Scanning popular web sources for trends...".to_string()
    }

    fn build_request(&self, category: &Category) -> AgentRequest {
        AgentRequest {
            system_prompt: "You are a trend researcher for an autonomous content studio. \
                            You track breaking news, breakthroughs and popular discussions \
                            across major web sources."
                .to_string(),
            user_prompt: format!(
                "Find the top 5 trending and most searched topics in the {} category for today.\n\
                 Focus on news, breakthroughs, or popular discussions from major web sources.\n\
                 Provide the output in a clean format with one topic per line: \
                 a topic name, then a colon, then a brief description.",
                category
            ),
            model_tier: ModelTier::Efficient,
            use_search: true,
            response_schema: None,
        }
    }

    fn parse_reply(&self, category: &Category, reply: AgentReply) -> DiscoveryOutcome {
        DiscoveryOutcome {
            trends: parser::extract_trends(&reply.text, *category, self.profile),
            sources: parser::extract_sources(&reply.grounding),
        }
    }
}
