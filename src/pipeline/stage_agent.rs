use anyhow::Result;
use async_trait::async_trait;

use crate::llm::client::{AgentReply, AgentRequest};
use crate::pipeline::context::PipelineContext;
use crate::types::PipelineStatus;

/// 极简阶段Agent trait - 每个流水线阶段实现一个Agent
///
/// 每个Agent只拥有一次出站调用：不重试（重试在客户端层）、不缓存、
/// 不限流。传输/服务失败向编排器传播；解析自身永远不会失败。
#[async_trait]
pub trait StageAgent: Send + Sync {
    /// Agent的输入
    type Input: Send + Sync;
    /// 解析后的输出
    type Output: Send + Sync;

    /// Agent类型标识
    fn agent_type(&self) -> &'static str;

    /// 进入该阶段时对外可见的流水线状态
    fn phase(&self) -> PipelineStatus;

    /// 进入该阶段时的进度消息
    fn progress_message(&self, input: &Self::Input) -> String;

    /// 构建本次调用的请求
    fn build_request(&self, input: &Self::Input) -> AgentRequest;

    /// 将原始回复解析为输出，带确定性兜底
    fn parse_reply(&self, input: &Self::Input, reply: AgentReply) -> Self::Output;

    /// 默认实现的execute方法：一次出站调用 + 本地解析
    async fn execute(&self, context: &PipelineContext, input: &Self::Input) -> Result<Self::Output> {
        let request = self.build_request(input);
        let reply = context.llm_client.generate(&request).await?;
        Ok(self.parse_reply(input, reply))
    }
}
