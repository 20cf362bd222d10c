//! careerwatch application shell
//!
//! Thin layer that parses the command line, loads configuration, and wires the
//! URL store and reporters to the scanner. Core logic lives in `crates/`.

mod cli;
pub mod commands;
mod interrupt;
mod menu;
pub mod report;
mod state;

pub use cli::{Cli, Command};
pub use interrupt::{Interrupts, SearchGuard};
pub use state::AppState;

use tracing::info;

/// Initialize tracing subscriber for logging.
///
/// Logs go to stderr so the console report on stdout stays readable.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_filter = if verbose {
        "info,careerwatch=debug,chromiumoxide=error"
    } else {
        "warn,chromiumoxide=error"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Execute the parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    info!("Starting careerwatch v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_cli(&cli)?;

    match cli.command {
        Some(Command::Search { keyword }) => {
            commands::search::run(&state, &keyword).await?;
        }
        Some(Command::Add { company, url }) => commands::targets::add(&state, &company, &url)?,
        Some(Command::Remove { target }) => commands::targets::remove(&state, &target)?,
        Some(Command::List) => commands::targets::list(&state)?,
        None => menu::interactive(&state).await?,
    }

    Ok(())
}
