use anyhow::{Context, bail};
use pulse_core::responses::ArticleListResponse;
use pulse_dash::{DetailFetcher, LoadOutcome};

use crate::cli::root_commands::ArticlesArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{limit::effective_limit, style};
use crate::context::AppContext;
use crate::output::{output, view};
use crate::progress::Progress;

/// Handle `pulse articles --procedure <id> | --category <id>`.
pub async fn handle(
    args: &ArticlesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let target = args
        .target()
        .context("pass --procedure <id> or --category <id>")?;
    let limit = effective_limit(args.limit, ctx.config.dashboard.detail_limit);
    let fetcher = DetailFetcher::new(ctx.source.clone(), limit);

    let spinner = Progress::spinner(&format!("Loading articles for {target}"));
    let outcome = fetcher.show(ctx.vertical, target.clone()).await;
    spinner.finish_clear();

    let state = fetcher.state();
    if flags.format == OutputFormat::Table {
        print!("{}", view::render_detail(&state, None, &style::for_vertical(ctx.vertical, None)));
    } else if outcome == LoadOutcome::Ready {
        output(
            &ArticleListResponse {
                vertical: ctx.vertical,
                target,
                articles: state.articles().to_vec(),
            },
            flags.format,
        )?;
    }

    if outcome == LoadOutcome::Failed {
        bail!("article load failed (run with --verbose for details)");
    }
    Ok(())
}
