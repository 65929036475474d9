pub mod article_writer;
pub mod draft_writer;
pub mod seo_analyst;
pub mod trend_scout;

pub use article_writer::{ArticleDraft, ArticleWriter, WriterBrief};
pub use draft_writer::{DraftBrief, DraftWriter};
pub use seo_analyst::SeoAnalyst;
pub use trend_scout::{DiscoveryOutcome, TrendScout};
