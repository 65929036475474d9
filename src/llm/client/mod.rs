//! LLM客户端 - 提供统一的模型服务调用接口

use std::future::Future;
use std::time::Duration;

use anyhow::Result;

use crate::config::Config;
use crate::llm::error::AgentError;

pub mod gemini;

use gemini::{
    ApiErrorBody, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GroundingChunk, Tool,
};

/// 模型档位：常规分析任务走高能效模型，长文写作走高质量模型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    Efficient,
    Powerful,
}

/// 单次Agent调用的请求描述
#[derive(Debug, Clone)]
pub struct AgentRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub model_tier: ModelTier,
    /// 是否启用web检索（产生检索元数据）
    pub use_search: bool,
    /// schema约束输出时的响应schema
    pub response_schema: Option<serde_json::Value>,
}

/// 单次Agent调用的结果：全文文本 + 检索元数据
#[derive(Debug, Clone, Default)]
pub struct AgentReply {
    pub text: String,
    pub grounding: Vec<GroundingChunk>,
}

/// LLM客户端
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    http: reqwest::Client,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { config, http })
    }

    /// 检查模型连接和功能是否正常
    pub async fn check_connection(&self) -> Result<()> {
        println!("🔄 正在检查模型连接...");
        let probe = AgentRequest {
            system_prompt: "You are a helpful assistant.".to_string(),
            user_prompt: "Hello".to_string(),
            model_tier: ModelTier::Efficient,
            use_search: false,
            response_schema: None,
        };
        match self.generate(&probe).await {
            Ok(_) => {
                println!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ 模型连接失败: {}", e);
                Err(e)
            }
        }
    }

    /// 执行一次Agent调用
    pub async fn generate(&self, request: &AgentRequest) -> Result<AgentReply> {
        self.retry_with_backoff(|| async {
            let response = self.dispatch(request).await?;
            let reply = AgentReply {
                text: response.text(),
                grounding: response.grounding_chunks(),
            };
            if self.config.verbose {
                println!(
                    "   ✅ 模型返回 {} 字符, {} 条检索依据",
                    reply.text.chars().count(),
                    reply.grounding.len()
                );
            }
            Ok(reply)
        })
        .await
    }

    /// 通用重试逻辑，用于处理异步操作的重试机制
    async fn retry_with_backoff<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, anyhow::Error>>,
    {
        let llm_config = &self.config.llm;
        let max_retries = llm_config.retry_attempts;
        let retry_delay_ms = llm_config.retry_delay_ms;
        let mut retries = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    retries += 1;
                    eprintln!(
                        "❌ 调用模型服务出错，重试中 (第 {} / {}次尝试): {}",
                        retries, max_retries, err
                    );
                    if retries >= max_retries {
                        return Err(err);
                    }
                    tokio::time::sleep(Duration::from_millis(retry_delay_ms)).await;
                }
            }
        }
    }

    fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Efficient => &self.config.llm.model_efficient,
            ModelTier::Powerful => &self.config.llm.model_powerful,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.llm.api_base_url.trim_end_matches('/'),
            model
        )
    }

    /// 发出一次generateContent请求，带超时保护
    async fn dispatch(&self, request: &AgentRequest) -> Result<GenerateContentResponse> {
        let llm_config = &self.config.llm;
        let body = GenerateContentRequest {
            contents: vec![Content::user(&request.user_prompt)],
            system_instruction: Some(Content::system(&request.system_prompt)),
            tools: if request.use_search {
                vec![Tool::google_search()]
            } else {
                Vec::new()
            },
            generation_config: Some(GenerationConfig {
                temperature: Some(llm_config.temperature),
                max_output_tokens: Some(llm_config.max_tokens),
                response_mime_type: request
                    .response_schema
                    .is_some()
                    .then(|| "application/json".to_string()),
                response_schema: request.response_schema.clone(),
            }),
        };

        let url = self.endpoint(self.model_for(request.model_tier));
        if self.config.verbose {
            println!(
                "   🧠 调用模型: {} (检索: {}, schema约束: {})",
                self.model_for(request.model_tier),
                request.use_search,
                request.response_schema.is_some()
            );
        }
        let send = async {
            let http_response = self
                .http
                .post(&url)
                .header("x-goog-api-key", &llm_config.api_key)
                .json(&body)
                .send()
                .await
                .map_err(AgentError::Transport)?;

            let status = http_response.status();
            if !status.is_success() {
                let error_body = http_response.text().await.unwrap_or_default();
                let detail = serde_json::from_str::<ApiErrorBody>(&error_body).unwrap_or_default();
                let message = if detail.error.message.is_empty() {
                    error_body
                } else {
                    detail.error.message
                };
                return Err(AgentError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            http_response
                .json::<GenerateContentResponse>()
                .await
                .map_err(AgentError::Transport)
        };

        match tokio::time::timeout(Duration::from_secs(llm_config.timeout_seconds), send).await {
            Ok(result) => result.map_err(anyhow::Error::from),
            Err(_) => Err(AgentError::Timeout(llm_config.timeout_seconds).into()),
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
