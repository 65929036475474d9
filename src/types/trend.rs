use serde::{Deserialize, Serialize};

/// 内容类目
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[serde(rename = "Technology")]
    #[default]
    Technology,
    #[serde(rename = "Artificial Intelligence")]
    ArtificialIntelligence,
    #[serde(rename = "Lifestyle")]
    Lifestyle,
    #[serde(rename = "Business")]
    Business,
    #[serde(rename = "Health")]
    Health,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Technology => write!(f, "Technology"),
            Category::ArtificialIntelligence => write!(f, "Artificial Intelligence"),
            Category::Lifestyle => write!(f, "Lifestyle"),
            Category::Business => write!(f, "Business"),
            Category::Health => write!(f, "Health"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "technology" | "tech" => Ok(Category::Technology),
            "artificial intelligence" | "artificial-intelligence" | "ai" => {
                Ok(Category::ArtificialIntelligence)
            }
            "lifestyle" => Ok(Category::Lifestyle),
            "business" => Ok(Category::Business),
            "health" => Ok(Category::Health),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl Category {
    /// 全部可用类目
    pub fn all() -> [Category; 5] {
        [
            Category::Technology,
            Category::ArtificialIntelligence,
            Category::Lifestyle,
            Category::Business,
            Category::Health,
        ]
    }
}

/// 竞争强度
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Competition {
    Low,
    Medium,
    High,
}

/// 趋势话题 - 每次发现运行整体替换，不跨运行保留
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub topic: String,
    pub description: String,
    /// 相关度0-100，目前为占位评分（见scoring模块）
    pub relevance: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition: Option<Competition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_volume: Option<String>,
}
