use clap::{Args, Subcommand, ValueEnum};
use pulse_core::enums::DetailTarget;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load and show the dashboard for one vertical.
    Dashboard,
    /// Newest articles linked to a procedure or category.
    Articles(ArticlesArgs),
    /// Interactive session: toggle verticals, refetch, drill down.
    Watch,
    /// Probe the backend and report latency.
    Check,
    /// Show the effective configuration (credentials redacted).
    Config,
    /// Print the JSON schema of a command's output.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
#[command(group(
    clap::ArgGroup::new("target")
        .required(true)
        .args(["procedure", "category"])
))]
pub struct ArticlesArgs {
    /// Procedure id.
    #[arg(long)]
    pub procedure: Option<String>,

    /// Category id.
    #[arg(long)]
    pub category: Option<String>,

    /// Max articles (defaults to `dashboard.detail_limit`).
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl ArticlesArgs {
    /// The selected drill-down target. Clap guarantees exactly one is set.
    #[must_use]
    pub fn target(&self) -> Option<DetailTarget> {
        self.procedure
            .clone()
            .map(DetailTarget::Procedure)
            .or_else(|| self.category.clone().map(DetailTarget::Category))
    }
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Output shape to describe.
    #[arg(value_enum)]
    pub shape: SchemaShape,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaShape {
    Dashboard,
    Articles,
    Check,
}
