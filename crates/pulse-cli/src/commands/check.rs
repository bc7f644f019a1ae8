use std::time::Instant;

use pulse_core::responses::CheckResponse;
use pulse_dash::catalogue;
use pulse_source::QuerySource;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `pulse check`: read one metrics row and time it.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let endpoint = ctx.source.describe();
    let spinner = Progress::spinner(&format!("Checking {endpoint}"));

    let started = Instant::now();
    let result = ctx.source.fetch(&catalogue::metrics(ctx.vertical)).await;
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let response = match result {
        Ok(rows) => {
            spinner.finish_clear();
            CheckResponse {
                ok: true,
                endpoint,
                latency_ms,
                rows: rows.len(),
                error: None,
            }
        }
        Err(error) => {
            spinner.finish_err("backend check failed");
            tracing::warn!(%error, "check: backend probe failed");
            CheckResponse {
                ok: false,
                endpoint,
                latency_ms,
                rows: 0,
                error: Some(error.to_string()),
            }
        }
    };

    output(&response, flags.format)?;
    if !response.ok {
        anyhow::bail!("backend check failed");
    }
    Ok(())
}
