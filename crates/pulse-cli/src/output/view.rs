//! Text rendering of the dashboard view tree for `--format table`.

use std::fmt::Write as _;

use pulse_core::entities::{NewsArticle, Procedure};
use pulse_core::format::{
    bar, format_date, format_growth, format_number, format_percent, humanize, max_value,
    percent_of_max,
};
use pulse_core::responses::{DashboardSnapshot, DashboardView, NewsArticles, TrendPoint};
use pulse_core::theme::{Rgb, Theme};
use pulse_dash::{DetailPhase, DetailState};

const BAR_WIDTH: usize = 24;
const LABEL_WIDTH: usize = 28;
const NEGATIVE: Rgb = Rgb(0xD3, 0x2F, 0x2F);

/// Which article feed tab is showing. `None` in [`Style::tab`] shows both.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NewsTab {
    #[default]
    ByProcedures,
    ByCategories,
}

impl NewsTab {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::ByProcedures => Self::ByCategories,
            Self::ByCategories => Self::ByProcedures,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::ByProcedures => "By procedures",
            Self::ByCategories => "By categories",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub theme: Theme,
    pub color: bool,
    pub tab: Option<NewsTab>,
}

impl Style {
    fn paint(&self, rgb: Rgb, text: &str) -> String {
        if self.color {
            rgb.paint(text)
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint(self.theme.primary, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(self.theme.text_secondary, text)
    }
}

/// Whole dashboard: heading, state line, and (when ready) every section.
#[must_use]
pub fn render_dashboard(view: &DashboardView, style: &Style) -> String {
    let mut out = String::new();
    let title = style.theme.heading();
    let _ = writeln!(out, "{}", style.heading(&title));
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));

    if view.loading {
        let _ = writeln!(out, "{}", style.dim("Loading…"));
        return out;
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "{}", style.paint(NEGATIVE, error));
        return out;
    }
    let Some(snapshot) = &view.data else {
        let _ = writeln!(out, "{}", style.dim("No data loaded."));
        return out;
    };

    render_metrics(&mut out, snapshot, style);
    render_rankings(&mut out, snapshot, style);
    render_trends(&mut out, &snapshot.trend_data, style);
    render_news(&mut out, &view.news_articles, style);
    out
}

fn render_metrics(out: &mut String, snapshot: &DashboardSnapshot, style: &Style) {
    let m = &snapshot.metrics;
    let tiles = [
        ("total_articles", m.total_articles, Some(m.article_growth_rate)),
        ("total_procedures", m.total_procedures, Some(m.procedure_growth_rate)),
        ("total_categories", m.total_categories, None),
        ("total_providers", m.total_providers, Some(m.provider_growth_rate)),
    ];
    let _ = writeln!(out);
    for (field, value, growth) in tiles {
        let caption = growth.map(format_growth).unwrap_or_default();
        let caption = match growth {
            Some(g) if g > 0.0 => style.paint(style.theme.secondary, &caption),
            _ => style.dim(&caption),
        };
        let _ = writeln!(out, "  {:<LABEL_WIDTH$}{value:>8}  {caption}", humanize(field));
    }
}

fn render_rankings(out: &mut String, snapshot: &DashboardSnapshot, style: &Style) {
    let procedures: Vec<(String, f64, String)> = snapshot
        .procedures
        .iter()
        .map(|p| (p.name.clone(), count(p.article_mentions), procedure_caption(p, style)))
        .collect();
    render_ranked(out, "Top procedures", &procedures, style);

    let categories: Vec<(String, f64, String)> = snapshot
        .categories
        .iter()
        .map(|c| (c.name.clone(), count(c.article_count), format!("{} articles", c.article_count)))
        .collect();
    render_ranked(out, "Top categories", &categories, style);

    let providers: Vec<(String, f64, String)> = snapshot
        .providers
        .iter()
        .map(|p| (p.name.clone(), p.average_rating, format!("{} ★", format_number(p.average_rating))))
        .collect();
    render_ranked(out, "Top providers", &providers, style);
}

/// `88 mentions · 14.5% growth · Orthodontics · Align`
fn procedure_caption(procedure: &Procedure, style: &Style) -> String {
    let mut parts = vec![
        format!("{} mentions", procedure.article_mentions),
        growth_chip(procedure.avg_expected_growth, style),
    ];
    parts.extend(
        [&procedure.category_name, &procedure.company_name]
            .into_iter()
            .flatten()
            .cloned(),
    );
    parts.join(" · ")
}

fn growth_chip(growth: f64, style: &Style) -> String {
    let label = format!("{} growth", format_percent(growth));
    if growth > 0.0 {
        style.paint(style.theme.secondary, &label)
    } else {
        style.paint(NEGATIVE, &label)
    }
}

#[allow(clippy::cast_precision_loss)]
fn count(n: u64) -> f64 {
    n as f64
}

/// One ranked list; bars are relative to the list's own maximum.
fn render_ranked(out: &mut String, title: &str, items: &[(String, f64, String)], style: &Style) {
    let _ = writeln!(out, "\n{}", style.heading(title));
    if items.is_empty() {
        let _ = writeln!(out, "  {}", style.dim("(none)"));
        return;
    }
    let max = max_value(items.iter().map(|(_, v, _)| *v));
    for (rank, (name, value, caption)) in items.iter().enumerate() {
        let filled = bar(percent_of_max(*value, max), BAR_WIDTH);
        let _ = writeln!(
            out,
            "  {:>2}. {:<LABEL_WIDTH$} {} {caption}",
            rank + 1,
            clip(name, LABEL_WIDTH),
            style.paint(style.theme.primary_light, &filled),
        );
    }
}

fn render_trends(out: &mut String, points: &[TrendPoint], style: &Style) {
    let _ = writeln!(out, "\n{}", style.heading("Market trends"));
    if points.is_empty() {
        let _ = writeln!(out, "  {}", style.dim("(none)"));
        return;
    }
    let max = max_value(points.iter().map(|p| p.value));
    for point in points {
        let filled = bar(percent_of_max(point.value, max), BAR_WIDTH);
        let _ = writeln!(
            out,
            "  {:<LABEL_WIDTH$} {} impact {:>5}  growth {}",
            clip(&point.name, LABEL_WIDTH),
            style.paint(style.theme.secondary, &filled),
            format_number(point.value),
            format_growth(point.growth),
        );
    }
}

fn render_news(out: &mut String, news: &NewsArticles, style: &Style) {
    let tabs: &[NewsTab] = match style.tab {
        Some(NewsTab::ByProcedures) => &[NewsTab::ByProcedures],
        Some(NewsTab::ByCategories) => &[NewsTab::ByCategories],
        None => &[NewsTab::ByProcedures, NewsTab::ByCategories],
    };
    for tab in tabs {
        let articles = match tab {
            NewsTab::ByProcedures => &news.by_procedures,
            NewsTab::ByCategories => &news.by_categories,
        };
        let header = style.tab.map_or_else(
            || format!("News: {}", tab.label()),
            |active| {
                let other = style.dim(&format!("[{}]", active.toggled().label()));
                format!("News: [{}] {other}", tab.label())
            },
        );
        let _ = writeln!(out, "\n{}", style.heading(&header));
        render_article_list(out, articles, style);
    }
}

fn render_article_list(out: &mut String, articles: &[NewsArticle], style: &Style) {
    if articles.is_empty() {
        let _ = writeln!(out, "  {}", style.dim("No articles."));
        return;
    }
    for article in articles {
        let date = format_date(article.published_date.as_deref());
        let _ = writeln!(out, "  • {}", article.title);
        let meta: Vec<&str> = [
            Some(date.as_str()).filter(|d| !d.is_empty()),
            article.source.as_deref(),
            article.procedure_name.as_deref().or(article.category_name.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !meta.is_empty() {
            let _ = writeln!(out, "    {}", style.dim(&meta.join(" · ")));
        }
        if let Some(url) = &article.url {
            let _ = writeln!(out, "    {}", style.dim(url));
        }
    }
}

/// Drill-down panel for `pulse articles` and `watch`.
///
/// With the selected `procedure` at hand the header names it and shows its
/// category, company, and growth; otherwise the labels come from the first
/// loaded article.
#[must_use]
pub fn render_detail(state: &DetailState, procedure: Option<&Procedure>, style: &Style) -> String {
    let mut out = String::new();
    let Some(target) = &state.target else {
        return out;
    };
    let title = procedure.map_or_else(
        || format!("Articles for {target}"),
        |p| format!("Articles for {}", p.name),
    );
    let _ = writeln!(out, "{}", style.heading(&title));

    let chips: Vec<String> = match procedure {
        Some(p) => [&p.category_name, &p.company_name]
            .into_iter()
            .flatten()
            .cloned()
            .chain(
                (p.avg_expected_growth.abs() > f64::EPSILON)
                    .then(|| growth_chip(p.avg_expected_growth, style)),
            )
            .collect(),
        None => state
            .articles()
            .first()
            .map(|a| {
                [&a.procedure_name, &a.category_name, &a.company_name]
                    .into_iter()
                    .flatten()
                    .cloned()
                    .collect()
            })
            .unwrap_or_default(),
    };
    if !chips.is_empty() {
        let _ = writeln!(out, "  {}", chips.join(" · "));
    }

    match &state.phase {
        DetailPhase::Idle => {}
        DetailPhase::Loading => {
            let _ = writeln!(out, "  {}", style.dim("Loading…"));
        }
        DetailPhase::Failed(message) => {
            let _ = writeln!(out, "  {}", style.paint(NEGATIVE, message));
        }
        DetailPhase::Ready(articles) if articles.is_empty() => {
            let _ = writeln!(out, "  {}", style.dim("No articles linked to this selection."));
        }
        DetailPhase::Ready(articles) => render_article_list(&mut out, articles, style),
    }
    out
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use pulse_core::entities::{Category, MarketTrend, NewsArticle, Procedure};
    use pulse_core::enums::{DetailTarget, Vertical};
    use pulse_core::responses::{DashboardSnapshot, DashboardView, NewsArticles};
    use pulse_core::theme::Theme;
    use pulse_dash::{DetailPhase, DetailState};

    use super::{NewsTab, Style, render_dashboard, render_detail};

    fn style(tab: Option<NewsTab>) -> Style {
        Style {
            theme: Theme::for_vertical(Vertical::Dental),
            color: false,
            tab,
        }
    }

    fn article(title: &str, date: Option<&str>) -> NewsArticle {
        NewsArticle {
            id: title.into(),
            title: title.into(),
            published_date: date.map(str::to_string),
            source: Some("Dental Tribune".into()),
            ..NewsArticle::default()
        }
    }

    fn ready_view() -> DashboardView {
        let snapshot = DashboardSnapshot::assemble(
            Vertical::Dental,
            None,
            Vec::new(),
            vec![
                Category {
                    id: "1".into(),
                    name: "Implants".into(),
                    article_count: 0,
                },
                Category {
                    id: "2".into(),
                    name: "Ortho".into(),
                    article_count: 0,
                },
            ],
            vec![MarketTrend {
                trend_name: "AI imaging".into(),
                impact_score: 9.1,
                expected_growth_rate: 18.5,
            }],
            Vec::new(),
        );
        DashboardView {
            vertical: Vertical::Dental,
            cycle: 1,
            loading: false,
            error: None,
            data: Some(snapshot),
            news_articles: NewsArticles {
                by_procedures: vec![article("Aligners boom", Some("2025-01-05"))],
                by_categories: vec![article("Ortho roundup", None)],
            },
        }
    }

    #[test]
    fn ready_view_has_every_section() {
        let out = render_dashboard(&ready_view(), &style(None));
        assert!(out.starts_with("Dental Industry Intelligence\n"));
        assert!(out.contains("Total articles"));
        assert!(out.contains("Top procedures"));
        assert!(out.contains("Market trends"));
        assert!(out.contains("↑ 18.5% from last period"));
        assert!(out.contains("News: By procedures"));
        assert!(out.contains("News: By categories"));
        assert!(out.contains("Jan 5, 2025 · Dental Tribune"));
    }

    #[test]
    fn zero_counts_draw_empty_bars() {
        let out = render_dashboard(&ready_view(), &style(None));
        let implants = out.lines().find(|l| l.contains("Implants")).unwrap();
        assert!(implants.contains(&"░".repeat(24)));
        assert!(!implants.contains('█'));
    }

    #[test]
    fn single_tab_shows_only_that_feed() {
        let out = render_dashboard(&ready_view(), &style(Some(NewsTab::ByCategories)));
        assert!(out.contains("Ortho roundup"));
        assert!(!out.contains("Aligners boom"));
        assert!(out.contains("[By procedures]"));
    }

    #[test]
    fn loading_and_error_states_hide_sections() {
        let mut view = ready_view();
        view.loading = true;
        view.data = None;
        let out = render_dashboard(&view, &style(None));
        assert!(out.contains("Loading"));
        assert!(!out.contains("Top procedures"));

        view.loading = false;
        view.error = Some("Failed to load data. Please try again later.".into());
        let out = render_dashboard(&view, &style(None));
        assert!(out.contains("Failed to load data"));
        assert!(!out.contains("Market trends"));
    }

    #[test]
    fn aesthetic_heading_uses_its_theme() {
        let style = Style {
            theme: Theme::for_vertical(Vertical::Aesthetic),
            color: true,
            tab: None,
        };
        let out = render_dashboard(&ready_view(), &style);
        assert!(out.starts_with("\u{1b}[38;2;128;0;32mAesthetic Industry Intelligence"));
    }

    #[test]
    fn empty_detail_says_nothing_linked() {
        let state = DetailState {
            open: true,
            target: Some(DetailTarget::Procedure("42".into())),
            phase: DetailPhase::Ready(Vec::new()),
            ..DetailState::default()
        };
        let out = render_detail(&state, None, &style(None));
        assert!(out.contains("Articles for procedure 42"));
        assert!(out.contains("No articles linked"));
    }

    fn aligners() -> Procedure {
        Procedure {
            id: "42".into(),
            name: "Clear aligners".into(),
            category_name: Some("Orthodontics".into()),
            company_name: Some("Align".into()),
            article_mentions: 88,
            avg_expected_growth: 14.5,
            ..Procedure::default()
        }
    }

    #[test]
    fn procedure_ranking_shows_growth_category_and_company() {
        let mut view = ready_view();
        if let Some(data) = view.data.as_mut() {
            data.procedures = vec![aligners()];
        }
        let out = render_dashboard(&view, &style(None));
        let line = out.lines().find(|l| l.contains("Clear aligners")).unwrap();
        assert!(line.contains("88 mentions · 14.5% growth · Orthodontics · Align"));
    }

    #[test]
    fn detail_header_carries_procedure_labels() {
        let state = DetailState {
            open: true,
            target: Some(DetailTarget::Procedure("42".into())),
            phase: DetailPhase::Ready(vec![article("Aligners boom", Some("2025-01-05"))]),
            ..DetailState::default()
        };
        let out = render_detail(&state, Some(&aligners()), &style(None));
        assert!(out.starts_with("Articles for Clear aligners\n"));
        assert!(out.contains("  Orthodontics · Align · 14.5% growth\n"));
    }

    #[test]
    fn detail_header_falls_back_to_article_labels() {
        let mut first = article("Filler safety", Some("2025-03-03"));
        first.category_name = Some("Injectables".into());
        let state = DetailState {
            open: true,
            target: Some(DetailTarget::Category("20".into())),
            phase: DetailPhase::Ready(vec![first]),
            ..DetailState::default()
        };
        let out = render_detail(&state, None, &style(None));
        assert!(out.starts_with("Articles for category 20\n  Injectables\n"));
    }
}
