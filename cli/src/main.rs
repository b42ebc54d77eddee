use std::path::PathBuf;

use clap::{CommandFactory, Parser};

mod handlers;

use cdcat_core::{config::Settings, logger::init_logger};
use handlers::{CommandHandler, utils::WriteAdapter};

/// Options configurable via the CLI.
#[derive(Debug, Parser)]
#[command(name = "cdcat", version = env!("CARGO_PKG_VERSION"), about)]
struct Flags {
    /// config file path
    #[clap(long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,
    /// log level
    #[clap(long)]
    log_level: Option<log::LevelFilter>,
    /// The catalogue file to work on, overrides the one in the config file
    #[clap(long, short, value_hint = clap::ValueHint::FilePath)]
    catalogue: Option<PathBuf>,
    /// subcommand to run
    #[clap(subcommand)]
    subcommand: handlers::Command,
}

#[test]
fn verify_cli() {
    Flags::command().debug_assert();
}

#[cfg(not(tarpaulin_include))]
fn main() -> anyhow::Result<()> {
    clap_complete::CompleteEnv::with_factory(Flags::command).complete();

    let flags = Flags::parse();

    let config = match flags.config {
        Some(config) => config,
        None => Settings::get_config_path()?,
    };
    let settings = Settings::init(config, flags.catalogue, flags.log_level)?;

    init_logger(settings.cli.log_level);

    let mut stdout_adapter = WriteAdapter(std::io::stdout());
    let mut stderr_adapter = WriteAdapter(std::io::stderr());

    flags
        .subcommand
        .handle(&settings.library, &mut stdout_adapter, &mut stderr_adapter)
}
