use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::types::Category;

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    /// 默认内容类目
    pub category: Category,

    /// 指定话题：发现运行结束后立即为该话题生成内容
    pub topic: Option<String>,

    /// 使用单阶段快速草稿路径（跳过SEO分析）
    pub quick_draft: bool,

    /// 生成完成后立即发布
    pub auto_publish: bool,

    /// 是否启用详细日志
    pub verbose: bool,

    /// 自动驾驶配置
    pub autopilot: AutopilotConfig,

    /// LLM模型配置
    pub llm: LLMConfig,
}

/// 自动驾驶配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AutopilotConfig {
    /// 是否启用
    pub enabled: bool,

    /// 轮询间隔（秒）
    pub interval_seconds: u64,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 高能效模型，用于趋势发现与SEO分析
    pub model_efficient: String,

    /// 高质量模型，用于长文写作
    pub model_powerful: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 重试次数
    pub retry_attempts: u32,

    /// 重试间隔（毫秒）
    pub retry_delay_ms: u64,

    /// 超时时间（秒）
    pub timeout_seconds: u64,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_seconds: 60,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("TRENDGENIUS_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://generativelanguage.googleapis.com"),
            model_efficient: String::from("gemini-3-flash-preview"),
            model_powerful: String::from("gemini-3-pro-preview"),
            max_tokens: 8192,
            temperature: 0.7,
            retry_attempts: 3,
            retry_delay_ms: 2000,
            timeout_seconds: 120,
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
