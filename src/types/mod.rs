pub mod content;
pub mod trend;

pub use content::{
    ContentMetrics, ContentStatus, FaqEntry, GeneratedContent, GroundingSource, PipelineStatus,
    SeoInsights,
};
pub use trend::{Category, Competition, Trend};
