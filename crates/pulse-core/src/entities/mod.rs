//! Entity structs for the dashboard views.
//!
//! Each entity maps to one backend view row. Fields are decoded through
//! [`crate::lenient`], so missing or malformed cells become zero/absent
//! instead of failing the read. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema`.

mod category;
mod market_trend;
mod metrics;
mod news_article;
mod procedure;
mod provider;

pub use category::Category;
pub use market_trend::MarketTrend;
pub use metrics::IndustryMetrics;
pub use news_article::NewsArticle;
pub use procedure::Procedure;
pub use provider::Provider;
