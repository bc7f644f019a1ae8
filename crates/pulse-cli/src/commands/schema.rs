use pulse_core::responses::{ArticleListResponse, CheckResponse, DashboardView};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::OutputFormat;
use crate::cli::root_commands::{SchemaArgs, SchemaShape};

/// Handle `pulse schema`. Always JSON; `--format raw` prints one line.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_value(args.shape)?;
    let rendered = if flags.format == OutputFormat::Raw {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{rendered}");
    Ok(())
}

fn schema_value(shape: SchemaShape) -> anyhow::Result<serde_json::Value> {
    let schema = match shape {
        SchemaShape::Dashboard => schema_for!(DashboardView),
        SchemaShape::Articles => schema_for!(ArticleListResponse),
        SchemaShape::Check => schema_for!(CheckResponse),
    };
    Ok(serde_json::to_value(schema)?)
}
