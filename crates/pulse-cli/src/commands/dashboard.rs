use anyhow::bail;
use pulse_dash::{Aggregator, LoadOutcome};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::style;
use crate::context::AppContext;
use crate::output::{output, view};
use crate::progress::Progress;

/// Handle `pulse dashboard`: one load cycle, then render.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let aggregator = Aggregator::new(
        ctx.source.clone(),
        ctx.config.dashboard.clone(),
        ctx.vertical,
    );

    let spinner = Progress::spinner(&format!("Loading {} dashboard", ctx.vertical.title()));
    let outcome = aggregator.load(ctx.vertical).await;
    spinner.finish_clear();

    let state = aggregator.view();
    if flags.format == OutputFormat::Table {
        print!("{}", view::render_dashboard(&state, &style::for_vertical(ctx.vertical, None)));
    } else {
        output(&state, flags.format)?;
    }

    if outcome == LoadOutcome::Failed {
        bail!("dashboard load failed (run with --verbose for details)");
    }
    Ok(())
}
