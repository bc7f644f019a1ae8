//! Which view each dashboard read goes to, and how it is filtered and
//! ordered.
//!
//! The `v_dashboard_*` views hold every vertical and are filtered on
//! `industry`. News views are split per vertical by name.

use pulse_config::DashboardConfig;
use pulse_core::enums::{DetailTarget, Vertical};
use pulse_source::Query;

pub const METRICS_VIEW: &str = "v_dashboard_industry_metrics";
pub const PROCEDURES_VIEW: &str = "v_dashboard_procedures";
pub const CATEGORIES_VIEW: &str = "v_dashboard_categories";
pub const TRENDS_VIEW: &str = "v_dashboard_market_trends";
pub const PROVIDERS_VIEW: &str = "v_dashboard_providers";

const INDUSTRY: &str = "industry";
const PUBLISHED: &str = "published_date";

/// The two article feeds, each backed by its own view per vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsFeed {
    ByProcedures,
    ByCategories,
}

impl NewsFeed {
    const fn suffix(self) -> &'static str {
        match self {
            Self::ByProcedures => "procedures",
            Self::ByCategories => "categories",
        }
    }
}

/// `v_news_articles_dental_procedures` and friends.
#[must_use]
pub fn news_view(vertical: Vertical, feed: NewsFeed) -> String {
    format!("v_news_articles_{}_{}", vertical.as_str(), feed.suffix())
}

#[must_use]
pub fn metrics(vertical: Vertical) -> Query {
    Query::table(METRICS_VIEW).eq(INDUSTRY, vertical.as_str()).limit(1)
}

#[must_use]
pub fn procedures(vertical: Vertical, limits: &DashboardConfig) -> Query {
    Query::table(PROCEDURES_VIEW)
        .eq(INDUSTRY, vertical.as_str())
        .order_desc("article_mentions")
        .limit(limits.procedure_limit)
}

#[must_use]
pub fn categories(vertical: Vertical, limits: &DashboardConfig) -> Query {
    Query::table(CATEGORIES_VIEW)
        .eq(INDUSTRY, vertical.as_str())
        .order_desc("article_count")
        .limit(limits.category_limit)
}

#[must_use]
pub fn market_trends(vertical: Vertical, limits: &DashboardConfig) -> Query {
    Query::table(TRENDS_VIEW)
        .eq(INDUSTRY, vertical.as_str())
        .order_desc("impact_score")
        .limit(limits.trend_limit)
}

#[must_use]
pub fn providers(vertical: Vertical, limits: &DashboardConfig) -> Query {
    Query::table(PROVIDERS_VIEW)
        .eq(INDUSTRY, vertical.as_str())
        .order_desc("average_rating")
        .limit(limits.provider_limit)
}

/// Newest articles for one feed.
#[must_use]
pub fn news(vertical: Vertical, feed: NewsFeed, limit: usize) -> Query {
    Query::table(news_view(vertical, feed))
        .order_desc(PUBLISHED)
        .limit(limit)
}

/// Newest articles linked to one procedure or category.
#[must_use]
pub fn detail(vertical: Vertical, target: &DetailTarget, limit: usize) -> Query {
    let (feed, column) = match target {
        DetailTarget::Procedure(_) => (NewsFeed::ByProcedures, "procedure_id"),
        DetailTarget::Category(_) => (NewsFeed::ByCategories, "category_id"),
    };
    news(vertical, feed, limit).eq(column, target.id())
}
