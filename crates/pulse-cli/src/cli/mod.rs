use std::path::PathBuf;

use clap::Parser;
use pulse_core::enums::Vertical;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `pulse` binary.
#[derive(Debug, Parser)]
#[command(
    name = "pulse",
    version,
    about = "Pulse - dental and aesthetic industry intelligence"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Colour in table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Vertical to show (defaults to `dashboard.default_vertical`)
    #[arg(long, global = true)]
    pub vertical: Option<Vertical>,

    /// Read from a JSON fixture file instead of the backend
    #[arg(long, global = true, value_name = "FILE")]
    pub fixture: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
            vertical: self.vertical,
            fixture: self.fixture.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pulse_core::enums::{DetailTarget, Vertical};

    use super::root_commands::SchemaShape;
    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_table_output() {
        let cli = Cli::try_parse_from(["pulse", "dashboard"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.color, ColorMode::Auto);
        assert!(cli.vertical.is_none());
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "pulse",
            "--format",
            "json",
            "--vertical",
            "aesthetic",
            "--verbose",
            "dashboard",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.vertical, Some(Vertical::Aesthetic));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["pulse", "check", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn vertical_is_case_insensitive() {
        let cli = Cli::try_parse_from(["pulse", "--vertical", "Dental", "dashboard"])
            .expect("cli should parse");
        assert_eq!(cli.vertical, Some(Vertical::Dental));
    }

    #[test]
    fn rejects_unknown_vertical_and_format() {
        assert!(Cli::try_parse_from(["pulse", "--vertical", "veterinary", "dashboard"]).is_err());
        assert!(Cli::try_parse_from(["pulse", "--format", "xml", "dashboard"]).is_err());
    }

    #[test]
    fn articles_requires_exactly_one_target() {
        assert!(Cli::try_parse_from(["pulse", "articles"]).is_err());
        assert!(
            Cli::try_parse_from(["pulse", "articles", "--procedure", "1", "--category", "2"])
                .is_err()
        );

        let cli = Cli::try_parse_from(["pulse", "articles", "--procedure", "42", "-l", "3"])
            .expect("cli should parse");
        let Commands::Articles(args) = cli.command else {
            panic!("expected articles command");
        };
        assert_eq!(args.target(), Some(DetailTarget::Procedure("42".into())));
        assert_eq!(args.limit, Some(3));
    }

    #[test]
    fn schema_takes_a_shape() {
        let cli = Cli::try_parse_from(["pulse", "schema", "dashboard"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema command");
        };
        assert_eq!(args.shape, SchemaShape::Dashboard);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["pulse", "--fixture", "/tmp/demo.json", "watch"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(
            flags.fixture.as_deref(),
            Some(std::path::Path::new("/tmp/demo.json"))
        );
    }
}
