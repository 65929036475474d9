use crate::config::Config;
use crate::types::Category;
use clap::Parser;
use std::path::PathBuf;

/// TrendGenius-RS - 由Rust与AI驱动的自主内容引擎
#[derive(Parser, Debug)]
#[command(name = "trendgenius-rs")]
#[command(
    about = "AI-based autonomous content engine. It discovers trending topics for a category, runs SEO/AEO analysis and drafts publish-ready long-form articles."
)]
#[command(version)]
pub struct Args {
    /// 内容类目 (technology, ai, lifestyle, business, health)
    #[arg(short, long, default_value = "technology")]
    pub category: String,

    /// 发现运行结束后立即为该话题生成文章
    #[arg(short, long)]
    pub topic: Option<String>,

    /// 使用单阶段快速草稿路径（跳过SEO分析）
    #[arg(long)]
    pub quick: bool,

    /// 生成完成后立即发布
    #[arg(long)]
    pub auto_publish: bool,

    /// 自动驾驶模式：按固定间隔轮询趋势
    #[arg(long)]
    pub autopilot: bool,

    /// 自动驾驶轮询间隔（秒）
    #[arg(long)]
    pub interval_seconds: Option<u64>,

    /// 配置文件路径
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// 高能效模型，用于趋势发现与SEO分析
    #[arg(long)]
    pub model_efficient: Option<String>,

    /// 高质量模型，用于长文写作
    #[arg(long)]
    pub model_powerful: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path).unwrap_or_else(|_| {
                panic!("⚠️ 警告: 无法读取配置文件 {:?}", config_path)
            })
        } else {
            // 尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("trendgenius.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    panic!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}",
                        default_config_path
                    )
                })
            } else {
                Config::default()
            }
        };

        // 覆盖类目配置
        match self.category.parse::<Category>() {
            Ok(category) => config.category = category,
            Err(_) => {
                eprintln!("⚠️ 警告: 未知的类目: {}，使用默认类目", self.category);
            }
        }

        // 覆盖运行配置
        if let Some(topic) = self.topic {
            config.topic = Some(topic);
        }
        if self.quick {
            config.quick_draft = true;
        }
        if self.auto_publish {
            config.auto_publish = true;
        }

        // 覆盖自动驾驶配置
        if self.autopilot {
            config.autopilot.enabled = true;
        }
        if let Some(interval_seconds) = self.interval_seconds {
            config.autopilot.interval_seconds = interval_seconds;
        }

        // 覆盖LLM配置
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(model_efficient) = self.model_efficient {
            config.llm.model_efficient = model_efficient;
        }
        if let Some(model_powerful) = self.model_powerful {
            config.llm.model_powerful = model_powerful;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        config.verbose = self.verbose || config.verbose;

        config
    }
}

// Include tests
#[cfg(test)]
mod tests;
