use std::io;

use anyhow::Result;
use clap::Parser;

use pixconv::cli::Cli;
use pixconv::runner::Runner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let decoder = cli.decoder();
    let encoder = cli.encoder();

    let mut stdout = io::stdout();
    let mut runner = Runner {
        out: &mut stdout,
        decoder: decoder.as_ref(),
        encoder: encoder.as_ref(),
        force: cli.force,
    };

    let report = runner.run(&cli.dir)?;
    if report.failed_count() > 0 {
        report.print_summary();
    }

    Ok(())
}
