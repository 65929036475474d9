//! Generative Language API的请求/响应线格式
//!
//! 响应侧所有字段都有默认值：缺失的候选、文本或检索元数据
//! 反序列化为空值而不是报错，由上层解析器兜底。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 文本片段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Part {
    pub text: String,
}

/// 对话内容块，请求与响应共用
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: &str) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.to_string() }],
        }
    }

    /// systemInstruction块不携带role
    pub fn system(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.to_string() }],
        }
    }
}

/// 内置工具声明，目前只使用google_search检索
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub google_search: Value,
}

impl Tool {
    pub fn google_search() -> Self {
        Self {
            google_search: Value::Object(serde_json::Map::new()),
        }
    }
}

/// 生成参数
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
}

/// generateContent请求体
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// 网页引用
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebSource {
    pub title: Option<String>,
    pub uri: Option<String>,
}

/// 检索依据块
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroundingChunk {
    pub web: Option<WebSource>,
}

/// 检索元数据
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroundingMetadata {
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// 候选结果
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub content: Option<Content>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// generateContent响应体
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// 拼接首个候选的全部文本片段
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    /// 首个候选的检索依据块
    pub fn grounding_chunks(&self) -> Vec<GroundingChunk> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|metadata| metadata.grounding_chunks.clone())
            .unwrap_or_default()
    }
}

/// 错误响应体
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiErrorDetail {
    pub code: u16,
    pub message: String,
    pub status: String,
}
