//! Read-only query description shared by every [`QuerySource`](crate::QuerySource).

use std::fmt;

/// Sort direction for a single ordering column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Ordering column. Nulls always sort last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

/// A `select * from source where col = value ... order by ... limit n` read.
///
/// ```
/// use pulse_source::Query;
///
/// let q = Query::table("v_dashboard_procedures")
///     .eq("industry", "dental")
///     .order_desc("article_mentions")
///     .limit(10);
/// assert_eq!(q.to_string(), "v_dashboard_procedures?industry=eq.dental&order=article_mentions.desc.nullslast&limit=10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub source: String,
    pub filters: Vec<(String, String)>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl Query {
    #[must_use]
    pub fn table(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Add an equality filter. Filters combine with AND.
    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    #[must_use]
    pub fn order_desc(mut self, column: impl Into<String>) -> Self {
        self.order = Some(Order {
            column: column.into(),
            direction: Direction::Desc,
        });
        self
    }

    #[must_use]
    pub fn order_asc(mut self, column: impl Into<String>) -> Self {
        self.order = Some(Order {
            column: column.into(),
            direction: Direction::Asc,
        });
        self
    }

    #[must_use]
    pub const fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// PostgREST query parameters, excluding `select`.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = self
            .filters
            .iter()
            .map(|(col, val)| (col.clone(), format!("eq.{val}")))
            .collect();
        if let Some(order) = &self.order {
            params.push((
                "order".into(),
                format!("{}.{}.nullslast", order.column, order.direction.as_str()),
            ));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".into(), limit.to_string()));
        }
        params
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)?;
        let params = self.to_params();
        for (i, (key, value)) in params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={}", urlencoding::encode(value))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn params_follow_postgrest_syntax() {
        let q = Query::table("v_news_articles_dental_procedures")
            .eq("procedure_id", "42")
            .order_desc("published_date")
            .limit(5);
        assert_eq!(
            q.to_params(),
            vec![
                ("procedure_id".to_string(), "eq.42".to_string()),
                (
                    "order".to_string(),
                    "published_date.desc.nullslast".to_string()
                ),
                ("limit".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn bare_table_has_no_params() {
        let q = Query::table("v_dashboard_categories");
        assert!(q.to_params().is_empty());
        assert_eq!(q.to_string(), "v_dashboard_categories");
    }

    #[test]
    fn later_order_replaces_earlier() {
        let q = Query::table("t").order_desc("a").order_asc("b");
        assert_eq!(
            q.order,
            Some(Order {
                column: "b".into(),
                direction: Direction::Asc
            })
        );
    }

    #[test]
    fn display_encodes_values() {
        let q = Query::table("t").eq("name", "a b");
        assert_eq!(q.to_string(), "t?name=eq.a%20b");
    }
}
