//! nvr - package identity CLI

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nvr_cli::input::collect_ids;
use nvr_cli::{Cli, Commands, cmd};

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Commands::Parse {
            kind,
            allow_empty_release,
            ids,
        } => cmd::parse::parse(kind, &collect_ids(ids)?, allow_empty_release, json),
        Commands::Format {
            kind,
            epoch_policy,
            rpm,
            ids,
        } => cmd::format::format(kind, &collect_ids(ids)?, epoch_policy, rpm, json),
        Commands::Compare { kind, a, b } => cmd::compare::compare(kind, &a, &b, json),
        Commands::Sort {
            kind,
            reverse,
            newest,
            ids,
        } => cmd::sort::sort(kind, &collect_ids(ids)?, reverse, newest, json),
        Commands::Completions { shell } => {
            cmd::completions::completions(shell);
            Ok(())
        }
    }
}
