use std::sync::Arc;

use anyhow::Context;
use pulse_core::entities::Procedure;
use pulse_core::enums::DetailTarget;
use pulse_core::responses::{ArticleListResponse, DashboardView};
use pulse_dash::{Aggregator, DetailFetcher, DetailPhase, DetailState, LoadOutcome, ModeState};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::style;
use crate::context::AppContext;
use crate::output::{output, view};

const HELP: &str = "keys: t toggle vertical · r refetch · n switch news tab · p <id> procedure articles · c <id> category articles · x close articles · q quit";

/// One line of watch-mode input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum WatchKey {
    Toggle,
    Refetch,
    Tab,
    Open(DetailTarget),
    Close,
    Help,
    Quit,
    Invalid(String),
}

fn parse_key(line: &str) -> Option<WatchKey> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;
    let arg = parts.next();
    let key = match (command, arg) {
        ("t", None) => WatchKey::Toggle,
        ("r", None) => WatchKey::Refetch,
        ("n", None) => WatchKey::Tab,
        ("x", None) => WatchKey::Close,
        ("q", None) => WatchKey::Quit,
        ("h" | "?", None) => WatchKey::Help,
        ("p", Some(id)) => WatchKey::Open(DetailTarget::Procedure(id.to_string())),
        ("c", Some(id)) => WatchKey::Open(DetailTarget::Category(id.to_string())),
        ("p" | "c", None) => WatchKey::Invalid(format!("'{command}' needs an id, e.g. '{command} 42'")),
        _ => WatchKey::Invalid(format!("unknown input '{}'", line.trim())),
    };
    Some(key)
}

/// Handle `pulse watch`: the aggregator follows the mode; stdin drives it.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mode = ModeState::new(ctx.vertical);
    let aggregator = Arc::new(Aggregator::new(
        ctx.source.clone(),
        ctx.config.dashboard.clone(),
        ctx.vertical,
    ));
    let detail = DetailFetcher::new(ctx.source.clone(), ctx.config.dashboard.detail_limit);

    let follower = Arc::clone(&aggregator).follow(mode.subscribe());
    let mut states = aggregator.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tab = view::NewsTab::default();

    if !flags.quiet {
        eprintln!("{HELP}");
    }

    loop {
        tokio::select! {
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = states.borrow_and_update().view();
                present_dashboard(&current, tab, flags)?;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                let Some(key) = parse_key(&line) else {
                    continue;
                };
                match key {
                    WatchKey::Toggle => {
                        let vertical = mode.toggle();
                        tracing::info!(%vertical, "watch: vertical toggled");
                        if detail.follow_vertical(vertical).await != LoadOutcome::Skipped {
                            present_detail(&detail.state(), &aggregator.view(), flags)?;
                        }
                    }
                    WatchKey::Refetch => {
                        let aggregator = Arc::clone(&aggregator);
                        tokio::spawn(async move { aggregator.refetch().await });
                    }
                    WatchKey::Tab => {
                        tab = tab.toggled();
                        present_dashboard(&aggregator.view(), tab, flags)?;
                    }
                    WatchKey::Open(target) => {
                        detail.show(mode.current(), target).await;
                        present_detail(&detail.state(), &aggregator.view(), flags)?;
                    }
                    WatchKey::Close => detail.close(),
                    WatchKey::Help => eprintln!("{HELP}"),
                    WatchKey::Quit => break,
                    WatchKey::Invalid(message) => eprintln!("{message}"),
                }
            }
        }
    }

    follower.abort();
    Ok(())
}

fn present_dashboard(
    current: &DashboardView,
    tab: view::NewsTab,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table => {
            let style = style::for_vertical(current.vertical, Some(tab));
            println!("{}", view::render_dashboard(current, &style));
            Ok(())
        }
        format => output(current, format),
    }
}

/// The ranked procedure a drill-down points at, when the dashboard on
/// screen is for the same vertical.
fn selected_procedure<'a>(state: &DetailState, dashboard: &'a DashboardView) -> Option<&'a Procedure> {
    let Some(DetailTarget::Procedure(id)) = &state.target else {
        return None;
    };
    dashboard
        .data
        .as_ref()
        .filter(|data| data.vertical == state.vertical)?
        .procedures
        .iter()
        .find(|procedure| &procedure.id == id)
}

fn present_detail(
    state: &DetailState,
    dashboard: &DashboardView,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match (flags.format, &state.phase, &state.target) {
        (OutputFormat::Table, _, _) => {
            let procedure = selected_procedure(state, dashboard);
            println!(
                "{}",
                view::render_detail(state, procedure, &style::for_vertical(state.vertical, None))
            );
            Ok(())
        }
        (format, DetailPhase::Ready(articles), Some(target)) => output(
            &ArticleListResponse {
                vertical: state.vertical,
                target: target.clone(),
                articles: articles.clone(),
            },
            format,
        ),
        (_, DetailPhase::Failed(message), _) => {
            eprintln!("{message}");
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use pulse_core::entities::Procedure;
    use pulse_core::enums::{DetailTarget, Vertical};
    use pulse_core::responses::{DashboardSnapshot, DashboardView, NewsArticles};
    use pulse_dash::DetailState;

    use super::{WatchKey, parse_key, selected_procedure};

    #[test]
    fn single_letter_keys() {
        assert_eq!(parse_key("t"), Some(WatchKey::Toggle));
        assert_eq!(parse_key(" r "), Some(WatchKey::Refetch));
        assert_eq!(parse_key("n"), Some(WatchKey::Tab));
        assert_eq!(parse_key("x"), Some(WatchKey::Close));
        assert_eq!(parse_key("q"), Some(WatchKey::Quit));
        assert_eq!(parse_key("?"), Some(WatchKey::Help));
    }

    #[test]
    fn drill_down_keys_take_an_id() {
        assert_eq!(
            parse_key("p 42"),
            Some(WatchKey::Open(DetailTarget::Procedure("42".into())))
        );
        assert_eq!(
            parse_key("c  7"),
            Some(WatchKey::Open(DetailTarget::Category("7".into())))
        );
        assert!(matches!(parse_key("p"), Some(WatchKey::Invalid(_))));
    }

    #[test]
    fn blank_lines_are_ignored_and_junk_is_reported() {
        assert_eq!(parse_key("   "), None);
        assert!(matches!(parse_key("toggle"), Some(WatchKey::Invalid(_))));
        assert!(matches!(parse_key("t now"), Some(WatchKey::Invalid(_))));
    }

    fn dashboard(vertical: Vertical) -> DashboardView {
        let procedure = Procedure {
            id: "42".into(),
            name: "Clear aligners".into(),
            ..Procedure::default()
        };
        DashboardView {
            vertical,
            cycle: 1,
            loading: false,
            error: None,
            data: Some(DashboardSnapshot::assemble(
                vertical,
                None,
                vec![procedure],
                Vec::new(),
                Vec::new(),
                Vec::new(),
            )),
            news_articles: NewsArticles::default(),
        }
    }

    fn detail(vertical: Vertical, target: DetailTarget) -> DetailState {
        DetailState {
            open: true,
            vertical,
            target: Some(target),
            ..DetailState::default()
        }
    }

    #[test]
    fn drill_down_finds_its_ranked_procedure() {
        let view = dashboard(Vertical::Dental);
        let state = detail(Vertical::Dental, DetailTarget::Procedure("42".into()));
        assert_eq!(
            selected_procedure(&state, &view).map(|p| p.name.as_str()),
            Some("Clear aligners")
        );
    }

    #[test]
    fn other_vertical_or_category_has_no_procedure() {
        let view = dashboard(Vertical::Dental);
        let aesthetic = detail(Vertical::Aesthetic, DetailTarget::Procedure("42".into()));
        assert!(selected_procedure(&aesthetic, &view).is_none());
        let category = detail(Vertical::Dental, DetailTarget::Category("42".into()));
        assert!(selected_procedure(&category, &view).is_none());
    }
}
