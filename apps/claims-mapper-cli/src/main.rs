use clap::Parser;

use claims_mapper_cli::cli::Cli;
use claims_mapper_cli::{commands, config, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load(cli.config.as_deref())?;
    if cli.json_logs {
        cfg.logging.json = true;
    }
    logging::init(&cfg.logging)?;

    tracing::debug!(mappers = cfg.claims_mapper.mappers.len(), "Loaded configuration");

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    commands::run(&cli.command, &cfg, stdin, &mut stdout)
}
