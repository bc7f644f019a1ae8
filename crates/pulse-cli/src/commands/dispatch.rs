use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Articles(args) => commands::articles::handle(&args, ctx, flags).await,
        Commands::Watch => commands::watch::handle(ctx, flags).await,
        Commands::Check => commands::check::handle(ctx, flags).await,
        Commands::Config | Commands::Schema(_) => {
            unreachable!("config/schema are pre-dispatched in main")
        }
    }
}
