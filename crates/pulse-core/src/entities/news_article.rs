use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::lenient::Cells;

/// A news article joined against a procedure or category view.
///
/// Article views expose `article_id`/`article_title`; either spelling
/// decodes, and the plain name wins when a row carries both.
/// `published_date` is kept as the raw backend string and formatted at
/// render time.
#[derive(Debug, Clone, Default, Serialize, JsonSchema, PartialEq, Eq)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub summary: Option<String>,
    pub published_date: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub procedure_id: Option<String>,
    pub procedure_name: Option<String>,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub company_name: Option<String>,
}

impl<'de> Deserialize<'de> for NewsArticle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let row = Cells::deserialize(deserializer)?;
        Ok(Self {
            id: row.text(&["id", "article_id"]),
            title: row.text(&["title", "article_title"]),
            summary: row.opt_text(&["summary"]),
            published_date: row.opt_text(&["published_date"]),
            source: row.opt_text(&["source"]),
            url: row.opt_text(&["url"]),
            procedure_id: row.opt_text(&["procedure_id"]),
            procedure_name: row.opt_text(&["procedure_name"]),
            category_id: row.opt_text(&["category_id"]),
            category_name: row.opt_text(&["category_name"]),
            company_name: row.opt_text(&["company_name"]),
        })
    }
}
