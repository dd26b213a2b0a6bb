use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use services::firmware::VcgencmdClient;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is reserved for check output.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let checks = services::catalog::load_checks(cli.checks.as_deref())?;
    let client = VcgencmdClient::new(&cli.vcgencmd, !cli.no_sudo);

    match cli.command {
        Some(Commands::List) => commands::handle_list(&cli, &checks)?,
        Some(Commands::Run) | None => commands::handle_run(&cli, &client, &checks)?,
    }

    Ok(())
}
